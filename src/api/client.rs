use super::types::{
    ErrorBody, JobDescriptionRequest, JobDescriptionResponse, MessageResponse, PreviewResponse,
    ResumeIdentity, ResumeListing, ScreeningRequest, ScreeningResponse, UploadResponse,
};
use crate::error::ClientError;
use crate::selection::PendingFile;
use crate::utils::url_path::endpoint;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

pub const UPLOAD_FIELD: &str = "resume";

const UPLOAD_ROUTE: &str = "upload_resume";
const LISTING_ROUTE: &str = "get_uploaded_resumes";
const VIEW_ROUTE: &str = "view_resume";
const DOWNLOAD_ROUTE: &str = "download_resume";
const PREVIEW_ROUTE: &str = "get_resume_preview";
const JOB_DESCRIPTION_ROUTE: &str = "api/job_description";
const SCREENING_ROUTE: &str = "screening_result";

/// The HTTP contract of the resume backend.
#[async_trait]
pub trait ResumeBackend: Send + Sync {
    /// One multipart POST carrying every file under the `resume` field.
    async fn upload_resumes(&self, files: &[PendingFile]) -> Result<UploadResponse, ClientError>;

    async fn list_resumes(&self) -> Result<ResumeListing, ClientError>;

    async fn resume_preview(&self, id: &ResumeIdentity) -> Result<PreviewResponse, ClientError>;

    /// Raw bytes of a stored resume.
    async fn resume_content(&self, id: &ResumeIdentity) -> Result<Vec<u8>, ClientError>;

    /// Where the browser should go to save a resume.
    fn download_url(&self, id: &ResumeIdentity) -> String;

    async fn set_job_description(&self, text: &str) -> Result<MessageResponse, ClientError>;

    async fn job_description(&self) -> Result<JobDescriptionResponse, ClientError>;

    async fn clear_job_description(&self) -> Result<MessageResponse, ClientError>;

    async fn screen_resumes(
        &self,
        ids: &[ResumeIdentity],
    ) -> Result<ScreeningResponse, ClientError>;
}

#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn url(&self, route: &str, filename: Option<&str>) -> String {
        endpoint(&self.base_url, route, filename)
    }

    /// Turns a non-success status into an error, keeping the backend's `{error}` text.
    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .ok();
        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ResumeBackend for HttpBackend {
    async fn upload_resumes(&self, files: &[PendingFile]) -> Result<UploadResponse, ClientError> {
        let mut form = Form::new();
        for file in files {
            let bytes = tokio::fs::read(&file.path).await?;
            debug!("Adding {} ({} bytes) to upload", file.name, bytes.len());
            form = form.part(UPLOAD_FIELD, Part::bytes(bytes).file_name(file.name.clone()));
        }

        let url = self.url(UPLOAD_ROUTE, None);
        info!("Uploading {} file(s) to {}", files.len(), url);
        let response = self.client.post(&url).multipart(form).send().await?;
        Self::read_json(response).await
    }

    async fn list_resumes(&self) -> Result<ResumeListing, ClientError> {
        let response = self.client.get(self.url(LISTING_ROUTE, None)).send().await?;
        Self::read_json(response).await
    }

    async fn resume_preview(&self, id: &ResumeIdentity) -> Result<PreviewResponse, ClientError> {
        let response = self
            .client
            .get(self.url(PREVIEW_ROUTE, Some(id.as_str())))
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn resume_content(&self, id: &ResumeIdentity) -> Result<Vec<u8>, ClientError> {
        let response = self
            .client
            .get(self.url(VIEW_ROUTE, Some(id.as_str())))
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    fn download_url(&self, id: &ResumeIdentity) -> String {
        self.url(DOWNLOAD_ROUTE, Some(id.as_str()))
    }

    async fn set_job_description(&self, text: &str) -> Result<MessageResponse, ClientError> {
        let response = self
            .client
            .post(self.url(JOB_DESCRIPTION_ROUTE, None))
            .json(&JobDescriptionRequest {
                job_description: text,
            })
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn job_description(&self) -> Result<JobDescriptionResponse, ClientError> {
        let response = self
            .client
            .get(self.url(JOB_DESCRIPTION_ROUTE, None))
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn clear_job_description(&self) -> Result<MessageResponse, ClientError> {
        let response = self
            .client
            .delete(self.url(JOB_DESCRIPTION_ROUTE, None))
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn screen_resumes(
        &self,
        ids: &[ResumeIdentity],
    ) -> Result<ScreeningResponse, ClientError> {
        let response = self
            .client
            .post(self.url(SCREENING_ROUTE, None))
            .json(&ScreeningRequest {
                selected_resumes: ids,
            })
            .send()
            .await?;
        Self::read_json(response).await
    }
}
