/// Configuration for the Chrona client.
#[derive(Debug, Clone)]
pub struct ChronaConfig {
    /// Base URL for the Chrona API server (e.g. `http://localhost:9999`).
    pub api_url: String,
}
