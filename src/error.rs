use thiserror::Error;

/// Everything that can go wrong between the window and the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please select at least one file to upload")]
    NoFilesSelected,

    #[error("An upload is already in progress")]
    UploadInProgress,

    #[error("Please select at least one resume to screen")]
    NoResumesSelected,

    #[error("Failed to send request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status {status}{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    #[error("{0}")]
    Application(String),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(String),
}

impl ClientError {
    /// The message shown to the user, with the backend's own wording when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}
