//! In-memory backend that records every call, for tests.

use super::client::ResumeBackend;
use super::types::{
    JobDescriptionResponse, MessageResponse, PreviewResponse, ResumeIdentity, ResumeListing,
    ScreeningResponse, UploadResponse,
};
use crate::error::ClientError;
use crate::selection::PendingFile;
use crate::utils::url_path::endpoint;
use async_trait::async_trait;
use reqwest::Url;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Upload(Vec<String>),
    List,
    Preview(String),
    Content(String),
    SetJobDescription(String),
    GetJobDescription,
    ClearJobDescription,
    Screen(Vec<String>),
}

#[derive(Default)]
pub struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    upload: Mutex<Option<Result<UploadResponse, ClientError>>>,
    listing: Mutex<Vec<ResumeIdentity>>,
    listing_error: Mutex<Option<ClientError>>,
    previews: Mutex<HashMap<String, String>>,
    contents: Mutex<HashMap<String, Vec<u8>>>,
    keywords: Mutex<Vec<String>>,
    screening: Mutex<Option<Result<ScreeningResponse, ClientError>>>,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn set_upload_response(&self, response: Result<UploadResponse, ClientError>) {
        *self.upload.lock().unwrap() = Some(response);
    }

    pub fn set_listing(&self, names: &[&str]) {
        *self.listing.lock().unwrap() = names.iter().map(|n| ResumeIdentity::new(*n)).collect();
    }

    pub fn fail_next_listing(&self, error: ClientError) {
        *self.listing_error.lock().unwrap() = Some(error);
    }

    /// Resumes without a preview answer with a 500.
    pub fn set_preview(&self, name: &str, preview: &str) {
        self.previews
            .lock()
            .unwrap()
            .insert(name.to_string(), preview.to_string());
    }

    pub fn set_content(&self, name: &str, bytes: &[u8]) {
        self.contents
            .lock()
            .unwrap()
            .insert(name.to_string(), bytes.to_vec());
    }

    pub fn set_screening_response(&self, response: Result<ScreeningResponse, ClientError>) {
        *self.screening.lock().unwrap() = Some(response);
    }
}

fn server_error() -> ClientError {
    ClientError::Status {
        status: 500,
        message: None,
    }
}

#[async_trait]
impl ResumeBackend for FakeBackend {
    async fn upload_resumes(&self, files: &[PendingFile]) -> Result<UploadResponse, ClientError> {
        self.record(Call::Upload(files.iter().map(|f| f.name.clone()).collect()));
        self.upload
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(UploadResponse::default()))
    }

    async fn list_resumes(&self) -> Result<ResumeListing, ClientError> {
        self.record(Call::List);
        if let Some(error) = self.listing_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(ResumeListing {
            uploaded_resumes: self.listing.lock().unwrap().clone(),
        })
    }

    async fn resume_preview(&self, id: &ResumeIdentity) -> Result<PreviewResponse, ClientError> {
        self.record(Call::Preview(id.to_string()));
        match self.previews.lock().unwrap().get(id.as_str()) {
            Some(preview) => Ok(PreviewResponse {
                preview: Some(preview.clone()),
            }),
            None => Err(server_error()),
        }
    }

    async fn resume_content(&self, id: &ResumeIdentity) -> Result<Vec<u8>, ClientError> {
        self.record(Call::Content(id.to_string()));
        self.contents
            .lock()
            .unwrap()
            .get(id.as_str())
            .cloned()
            .ok_or_else(server_error)
    }

    fn download_url(&self, id: &ResumeIdentity) -> String {
        let base = Url::parse("http://backend.test").unwrap();
        endpoint(&base, "download_resume", Some(id.as_str()))
    }

    async fn set_job_description(&self, text: &str) -> Result<MessageResponse, ClientError> {
        self.record(Call::SetJobDescription(text.to_string()));
        if text.trim().is_empty() {
            return Err(ClientError::Status {
                status: 400,
                message: Some("No job description provided".to_string()),
            });
        }
        *self.keywords.lock().unwrap() = text.split_whitespace().map(str::to_string).collect();
        Ok(MessageResponse {
            message: Some("Job description set successfully".to_string()),
            error: None,
        })
    }

    async fn job_description(&self) -> Result<JobDescriptionResponse, ClientError> {
        self.record(Call::GetJobDescription);
        Ok(JobDescriptionResponse {
            job_description: self.keywords.lock().unwrap().clone(),
        })
    }

    async fn clear_job_description(&self) -> Result<MessageResponse, ClientError> {
        self.record(Call::ClearJobDescription);
        self.keywords.lock().unwrap().clear();
        Ok(MessageResponse {
            message: Some("Job description cleared".to_string()),
            error: None,
        })
    }

    async fn screen_resumes(
        &self,
        ids: &[ResumeIdentity],
    ) -> Result<ScreeningResponse, ClientError> {
        self.record(Call::Screen(ids.iter().map(|id| id.to_string()).collect()));
        self.screening
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(ScreeningResponse::default()))
    }
}
