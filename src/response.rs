use serde::Serialize;

/// Envelope used by the legacy delete-by-name endpoint. The `status` strings
/// are part of the historical contract and must not change.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn handled_with(data: T) -> Self {
        Self {
            data: Some(data),
            status: "Successfully processed request.".to_string(),
            error: None,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            data: None,
            status: "Failed to process request.".to_string(),
            error: Some(message.to_string()),
        }
    }
}
