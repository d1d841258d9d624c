//! Session-scoped folder store.
//!
//! [`FolderStore`] keeps a local copy of the remote folder listing plus a
//! current selection and transient loading/error flags. The server is the
//! single source of truth: mutating actions never patch the listing in
//! place, they re-fetch it wholesale after the server confirms the change.
//!
//! Failure handling is deliberately asymmetric. Read actions absorb
//! failures into the `error` field and hand back a safe default; mutating
//! actions record the same diagnostics but also propagate the failure so
//! the caller can react (e.g. keep a form open).

use tracing::{debug, error};

use crate::api::{FolderApiClient, FolderApiError};
use crate::models::Folder;

/// Error message recorded when the folder listing cannot be fetched.
pub const FETCH_STRUCTURE_ERROR: &str = "Failed to fetch folder structure";
/// Error message recorded when a folder's contents cannot be fetched.
pub const FETCH_CONTENTS_ERROR: &str = "Failed to fetch folder contents";
/// Error message recorded when folder creation fails.
pub const CREATE_FOLDER_ERROR: &str = "Failed to create folder";
/// Error message recorded when a rename fails.
pub const RENAME_FOLDER_ERROR: &str = "Failed to rename folder";
/// Error message recorded when a delete fails.
pub const DELETE_FOLDER_ERROR: &str = "Failed to delete folder";

/// State container mirroring the server-side folder hierarchy.
///
/// One instance per consumer - there is no global store. Tests build
/// isolated instances against a mock server via [`FolderStore::with_client`].
///
/// Actions take `&mut self`, so two actions cannot overlap on the same
/// store; `loading` and `error` always describe the most recently settled
/// action.
#[derive(Debug, Clone)]
pub struct FolderStore {
    client: FolderApiClient,
    folders: Vec<Folder>,
    selected_folder: Option<Folder>,
    loading: bool,
    error: Option<String>,
}

impl FolderStore {
    /// Create a store backed by the default API client.
    pub fn new() -> Self {
        Self::with_client(FolderApiClient::new())
    }

    /// Create a store backed by a specific client.
    ///
    /// Used to point the store at a non-default base URL, e.g. a mock
    /// server in tests.
    pub fn with_client(client: FolderApiClient) -> Self {
        Self {
            client,
            folders: Vec::new(),
            selected_folder: None,
            loading: false,
            error: None,
        }
    }

    /// The listing as of the most recent completed fetch.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// The currently selected folder, if any.
    ///
    /// The selection is a copy taken at selection time; it is not refreshed
    /// when the listing is refetched and may go stale.
    pub fn selected_folder(&self) -> Option<&Folder> {
        self.selected_folder.as_ref()
    }

    /// True while an action's network round-trip is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fixed message describing the last failed action, or None.
    ///
    /// Cleared at the start of every action.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the current selection.
    ///
    /// No validation, no side effects, no network call.
    pub fn set_selected_folder(&mut self, folder: Option<Folder>) {
        self.selected_folder = folder;
    }

    /// Find a folder in the current listing by id.
    ///
    /// Linear scan, first match wins. Nested `children` are not searched.
    pub fn folder_by_id(&self, id: i64) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.id == id)
    }

    /// Re-fetch the full listing, replacing the local copy wholesale.
    ///
    /// On failure the listing keeps its previous value and the fixed fetch
    /// message is recorded in `error`; the failure is never returned to the
    /// caller.
    pub async fn fetch_folder_structure(&mut self) {
        self.loading = true;
        self.error = None;

        match self.client.list_folders().await {
            Ok(folders) => {
                debug!("Fetched {} folder entries", folders.len());
                self.folders = folders;
            }
            Err(e) => {
                error!("Failed to fetch folder structure: {}", e);
                self.error = Some(FETCH_STRUCTURE_ERROR.to_string());
            }
        }

        self.loading = false;
    }

    /// Fetch the direct contents of one folder.
    ///
    /// The result is returned to the caller and never stored in the
    /// listing. On failure an empty sequence comes back instead of an
    /// error.
    pub async fn folder_contents(&mut self, folder_id: i64) -> Vec<Folder> {
        self.loading = true;
        self.error = None;

        let contents = match self.client.folder_contents(folder_id).await {
            Ok(contents) => contents,
            Err(e) => {
                error!("Failed to fetch contents of folder {}: {}", folder_id, e);
                self.error = Some(FETCH_CONTENTS_ERROR.to_string());
                Vec::new()
            }
        };

        self.loading = false;
        contents
    }

    /// Create a folder, then re-sync the listing.
    ///
    /// Returns the created folder from the create response, not from the
    /// refetched listing. The refetch is awaited before returning and
    /// applies its own error handling independently.
    ///
    /// On failure the fixed create message is recorded and the error is
    /// propagated to the caller.
    pub async fn create_folder(
        &mut self,
        name: &str,
        parent_id: Option<i64>,
    ) -> Result<Folder, FolderApiError> {
        self.loading = true;
        self.error = None;

        let result = match self.client.create_folder(name, parent_id).await {
            Ok(created) => {
                self.fetch_folder_structure().await;
                Ok(created)
            }
            Err(e) => {
                error!("Failed to create folder {:?}: {}", name, e);
                self.error = Some(CREATE_FOLDER_ERROR.to_string());
                Err(e)
            }
        };

        self.loading = false;
        result
    }

    /// Rename a folder, then re-sync the listing.
    ///
    /// Returns the server's updated representation. On failure the fixed
    /// rename message is recorded and the error is propagated.
    pub async fn rename_folder(
        &mut self,
        folder_id: i64,
        new_name: &str,
    ) -> Result<Folder, FolderApiError> {
        self.loading = true;
        self.error = None;

        let result = match self.client.rename_folder(folder_id, new_name).await {
            Ok(renamed) => {
                self.fetch_folder_structure().await;
                Ok(renamed)
            }
            Err(e) => {
                error!("Failed to rename folder {}: {}", folder_id, e);
                self.error = Some(RENAME_FOLDER_ERROR.to_string());
                Err(e)
            }
        };

        self.loading = false;
        result
    }

    /// Delete a folder, then re-sync the listing.
    ///
    /// If the deleted folder is currently selected, the selection is
    /// cleared after the re-sync. On failure the fixed delete message is
    /// recorded and the error is propagated.
    pub async fn delete_folder(&mut self, folder_id: i64) -> Result<(), FolderApiError> {
        self.loading = true;
        self.error = None;

        let result = match self.client.delete_folder(folder_id).await {
            Ok(()) => {
                self.fetch_folder_structure().await;
                if self.selected_folder.as_ref().is_some_and(|f| f.id == folder_id) {
                    self.selected_folder = None;
                }
                Ok(())
            }
            Err(e) => {
                error!("Failed to delete folder {}: {}", folder_id, e);
                self.error = Some(DELETE_FOLDER_ERROR.to_string());
                Err(e)
            }
        };

        self.loading = false;
        result
    }
}

impl Default for FolderStore {
    fn default() -> Self {
        Self::new()
    }
}
