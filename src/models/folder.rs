use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminates container folders from leaf files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FolderKind {
    Folder,
    File,
}

/// A folder or file node in the server-side hierarchy.
///
/// The server owns these records; the client only holds a cached copy of
/// the most recent listing. Hierarchy is implied by `parent_id` plus the
/// optional server-populated `children` sequence - nothing is computed
/// locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Server-assigned unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Parent folder id; None for root-level entries (absent or null on the wire)
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// Folder or file (API sends this as "type")
    #[serde(rename = "type")]
    pub kind: FolderKind,
    /// Fully-qualified path, computed by the server
    pub path: String,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
    /// When the entry was last updated
    pub updated_at: DateTime<Utc>,
    /// Nested contents, present only in nested-contents responses.
    /// Never maintained incrementally by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Folder>>,
}

impl Folder {
    /// True for container entries.
    pub fn is_folder(&self) -> bool {
        self.kind == FolderKind::Folder
    }

    /// True for leaf file entries.
    pub fn is_file(&self) -> bool {
        self.kind == FolderKind::File
    }
}
