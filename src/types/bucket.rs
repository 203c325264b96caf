use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named retention-scoped data container owned by an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub id: String,
    pub name: String,
    pub org_id: String,
    /// Name of the owning organization.
    pub organization: String,
    #[serde(default)]
    pub retention_rules: Vec<RetentionRule>,
    /// Related resource paths keyed by relation (`self`, `org`, `logs`,
    /// `labels`).
    #[serde(default)]
    pub links: HashMap<String, String>,
}

/// Policy describing when data in a bucket expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionRule {
    #[serde(rename = "type")]
    pub rule_type: String,
    #[serde(rename = "everySeconds")]
    pub every_seconds: u64,
}

impl RetentionRule {
    /// An `expire` rule dropping data older than `every_seconds`.
    pub fn expire(every_seconds: u64) -> Self {
        Self {
            rule_type: "expire".to_string(),
            every_seconds,
        }
    }
}

/// Wire wrapper for `GET /api/v2/buckets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BucketsResponse {
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}

/// Body for `POST /api/v2/buckets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBucketRequest {
    pub name: String,
    pub org_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub retention_rules: Vec<RetentionRule>,
}

/// Body for `PATCH /api/v2/buckets/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBucketRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub retention_rules: Vec<RetentionRule>,
}

impl From<&Bucket> for UpdateBucketRequest {
    fn from(bucket: &Bucket) -> Self {
        Self {
            name: bucket.name.clone(),
            retention_rules: bucket.retention_rules.clone(),
        }
    }
}
