use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A label attachable to resources, carrying free-form properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

/// Wire wrapper around a single label (create and attach responses).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelResponse {
    pub label: Label,
}

/// Wire wrapper for label listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelsResponse {
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// Body for `POST /api/v2/labels`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostLabelRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
}

/// Body for attaching an existing label to a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLabelRequest {
    pub label_id: String,
}
