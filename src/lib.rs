pub mod client;
pub mod config;
pub mod error;
pub mod rest;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Client
pub use client::Chrona;
pub use config::ChronaConfig;
pub use error::{ChronaError, Result};

// REST client
pub use rest::ChronaHttpClient;

// Buckets + retention
pub use types::{Bucket, RetentionRule};

// Operation log
pub use types::OperationLog;

// Labels
pub use types::Label;

// Membership
pub use types::{ResourceMember, UserRole};

// Organizations + users
pub use types::{Organization, User};

// Pagination
pub use types::{FindOptions, Page};
