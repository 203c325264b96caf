use serde::{Deserialize, Serialize};

/// Access role a user holds on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Member,
    Owner,
}

/// A user granted access rights on a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMember {
    pub user_id: String,
    pub user_name: String,
    pub role: UserRole,
}

/// Wire wrapper for member and owner listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceMembersResponse {
    #[serde(default)]
    pub users: Vec<ResourceMember>,
}

/// Body for member and owner attach requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddResourceMemberRequest {
    pub user_id: String,
}
