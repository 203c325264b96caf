use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One audit entry from a resource operation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationLog {
    /// Human-readable summary, e.g. `Bucket Created`.
    pub description: String,
    pub time: DateTime<Utc>,
}

/// Wire wrapper for `GET /api/v2/buckets/{id}/logs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationLogsResponse {
    #[serde(default)]
    pub logs: Vec<OperationLog>,
}
