use serde::Serialize;

/// Body for POST /folders.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Display name for the new folder
    pub name: String,
    /// Parent folder id; serialized as JSON null for root-level folders
    pub parent_id: Option<i64>,
}

/// Body for PATCH /folders/{id}.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenameFolderRequest {
    /// The new display name
    pub name: String,
}
