use serde::{Deserialize, Serialize};
use std::fmt;

/// The filename a stored resume is known by on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeIdentity(pub String);

impl ResumeIdentity {
    pub fn new(filename: impl Into<String>) -> Self {
        Self(filename.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResumeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    pub error: Option<String>,
    pub message: Option<String>,
    pub results: Option<Vec<UploadResult>>,
}

/// Outcome for one submitted file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResult {
    pub filename: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub resume_score: Option<f64>,
    #[serde(default)]
    pub missing_requirements: Vec<String>,
    #[serde(default)]
    pub save_path: Option<String>,
}

impl UploadResult {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeListing {
    #[serde(default)]
    pub uploaded_resumes: Vec<ResumeIdentity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewResponse {
    pub preview: Option<String>,
}

/// Body of the backend's generic `{error}` replies.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobDescriptionResponse {
    #[serde(default)]
    pub job_description: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct JobDescriptionRequest<'a> {
    pub job_description: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScreeningRequest<'a> {
    pub selected_resumes: &'a [ResumeIdentity],
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreeningResponse {
    pub error: Option<String>,
    #[serde(default)]
    pub results: Vec<ScreeningResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScreeningResult {
    pub filename: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub missing_requirements: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}
