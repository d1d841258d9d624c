//! Folder API client for backend communication.
//!
//! This module provides the HTTP client for the folder REST endpoints.
//! Every response body arrives wrapped in the [`ApiResponse`] envelope;
//! the client unwraps `data` and discards the rest.

use reqwest::Client;
use thiserror::Error;

use crate::models::{ApiResponse, CreateFolderRequest, Folder, RenameFolderRequest};

/// Default base URL for the folder API.
pub const FOLDER_API_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Error type for folder API client operations.
#[derive(Debug, Error)]
pub enum FolderApiError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Envelope deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Client for interacting with the folder REST API.
///
/// Holds a reusable HTTP client; clone freely, the connection pool is
/// shared.
#[derive(Debug, Clone)]
pub struct FolderApiClient {
    /// Base URL for the folder API
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl FolderApiClient {
    /// Create a new FolderApiClient with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: FOLDER_API_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Create a new FolderApiClient with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Fetch the full flat folder listing.
    ///
    /// Sends a GET request to `/folders`.
    ///
    /// # Returns
    /// The unwrapped folder sequence, or an error if the request fails
    pub async fn list_folders(&self) -> Result<Vec<Folder>, FolderApiError> {
        let url = format!("{}/folders", self.base_url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FolderApiError::Server { status, message });
        }

        let text = response.text().await?;
        let envelope: ApiResponse<Vec<Folder>> = serde_json::from_str(&text)?;
        Ok(envelope.data)
    }

    /// Fetch the direct contents of a single folder.
    ///
    /// Sends a GET request to `/folders/{id}/contents`.
    ///
    /// # Arguments
    /// * `folder_id` - The id of the folder to list
    ///
    /// # Returns
    /// The unwrapped folder sequence, or an error if the request fails
    pub async fn folder_contents(&self, folder_id: i64) -> Result<Vec<Folder>, FolderApiError> {
        let url = format!("{}/folders/{}/contents", self.base_url, folder_id);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FolderApiError::Server { status, message });
        }

        let text = response.text().await?;
        let envelope: ApiResponse<Vec<Folder>> = serde_json::from_str(&text)?;
        Ok(envelope.data)
    }

    /// Create a folder.
    ///
    /// Sends a POST request to `/folders` with body `{name, parentId}`.
    ///
    /// # Arguments
    /// * `name` - Display name for the new folder
    /// * `parent_id` - Parent folder id, or None for a root-level folder
    ///
    /// # Returns
    /// The created folder as reported by the server
    pub async fn create_folder(
        &self,
        name: &str,
        parent_id: Option<i64>,
    ) -> Result<Folder, FolderApiError> {
        let url = format!("{}/folders", self.base_url);
        let body = CreateFolderRequest {
            name: name.to_string(),
            parent_id,
        };

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FolderApiError::Server { status, message });
        }

        let text = response.text().await?;
        let envelope: ApiResponse<Folder> = serde_json::from_str(&text)?;
        Ok(envelope.data)
    }

    /// Rename a folder.
    ///
    /// Sends a PATCH request to `/folders/{id}` with body `{name}`.
    ///
    /// # Returns
    /// The updated folder as reported by the server
    pub async fn rename_folder(
        &self,
        folder_id: i64,
        new_name: &str,
    ) -> Result<Folder, FolderApiError> {
        let url = format!("{}/folders/{}", self.base_url, folder_id);
        let body = RenameFolderRequest {
            name: new_name.to_string(),
        };

        let response = self.client.patch(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FolderApiError::Server { status, message });
        }

        let text = response.text().await?;
        let envelope: ApiResponse<Folder> = serde_json::from_str(&text)?;
        Ok(envelope.data)
    }

    /// Delete a folder.
    ///
    /// Sends a DELETE request to `/folders/{id}`. The response body is
    /// ignored.
    pub async fn delete_folder(&self, folder_id: i64) -> Result<(), FolderApiError> {
        let url = format!("{}/folders/{}", self.base_url, folder_id);

        let response = self.client.delete(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FolderApiError::Server { status, message });
        }

        Ok(())
    }
}

impl Default for FolderApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = FolderApiClient::new();
        assert_eq!(client.base_url, FOLDER_API_BASE_URL);
    }

    #[test]
    fn test_client_with_base_url() {
        let custom_url = "http://localhost:8080/api/v1".to_string();
        let client = FolderApiClient::with_base_url(custom_url.clone());
        assert_eq!(client.base_url, custom_url);
    }

    #[test]
    fn test_client_default() {
        let client = FolderApiClient::default();
        assert_eq!(client.base_url, FOLDER_API_BASE_URL);
    }

    #[test]
    fn test_error_display_server() {
        let err = FolderApiError::Server {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("500"));
        assert!(display.contains("Internal Server Error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: FolderApiError = json_err.into();
        assert!(matches!(err, FolderApiError::Json(_)));
    }

    #[tokio::test]
    async fn test_list_folders_with_unreachable_server() {
        let client = FolderApiClient::with_base_url("http://127.0.0.1:1/api/v1".to_string());
        let result = client.list_folders().await;
        assert!(matches!(result, Err(FolderApiError::Http(_))));
    }

    #[tokio::test]
    async fn test_delete_folder_with_unreachable_server() {
        let client = FolderApiClient::with_base_url("http://127.0.0.1:1/api/v1".to_string());
        let result = client.delete_folder(1).await;
        assert!(result.is_err());
    }
}
