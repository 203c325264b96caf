use serde::{Deserialize, Serialize};

/// An organization owning buckets and other resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

/// Wire wrapper for `GET /api/v2/orgs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizationsResponse {
    #[serde(default)]
    pub orgs: Vec<Organization>,
}

/// Body for `POST /api/v2/orgs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostOrganizationRequest {
    pub name: String,
}
