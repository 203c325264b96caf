use serde::{Deserialize, Serialize};

/// A platform user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// Body for `POST /api/v2/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostUserRequest {
    pub name: String,
}
