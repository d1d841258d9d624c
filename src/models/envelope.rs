use serde::Deserialize;

/// Wire envelope wrapped around every API response body.
///
/// The store only ever consumes `data`; `status` and `message` ride along
/// for diagnostics and are dropped after unwrapping.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// The actual payload
    pub data: T,
    /// Server-reported status code, duplicated from the HTTP layer
    pub status: u16,
    /// Server-provided human-readable message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Folder;

    #[test]
    fn test_deserialize_folder_envelope() {
        let json = r#"{
            "data": {
                "id": 5,
                "name": "Archive",
                "parentId": null,
                "type": "folder",
                "path": "/Archive",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            },
            "status": 201,
            "message": "Folder created"
        }"#;

        let envelope: ApiResponse<Folder> =
            serde_json::from_str(json).expect("Failed to deserialize");

        assert_eq!(envelope.data.id, 5);
        assert_eq!(envelope.data.name, "Archive");
        assert_eq!(envelope.status, 201);
        assert_eq!(envelope.message, "Folder created");
    }

    #[test]
    fn test_deserialize_listing_envelope() {
        let json = r#"{
            "data": [
                {
                    "id": 1,
                    "name": "Documents",
                    "parentId": null,
                    "type": "folder",
                    "path": "/Documents",
                    "createdAt": "2024-01-01T00:00:00Z",
                    "updatedAt": "2024-01-01T00:00:00Z"
                },
                {
                    "id": 2,
                    "name": "readme.md",
                    "parentId": 1,
                    "type": "file",
                    "path": "/Documents/readme.md",
                    "createdAt": "2024-01-01T00:00:00Z",
                    "updatedAt": "2024-01-01T00:00:00Z"
                }
            ],
            "status": 200,
            "message": "OK"
        }"#;

        let envelope: ApiResponse<Vec<Folder>> =
            serde_json::from_str(json).expect("Failed to deserialize");

        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0].name, "Documents");
        assert_eq!(envelope.data[1].parent_id, Some(1));
    }

    #[test]
    fn test_deserialize_envelope_missing_data_fails() {
        let json = r#"{"status": 200, "message": "OK"}"#;

        let result = serde_json::from_str::<ApiResponse<Vec<Folder>>>(json);

        assert!(result.is_err());
    }
}
