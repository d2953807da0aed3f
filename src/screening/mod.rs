use crate::api::{
    JobDescriptionResponse, MessageResponse, ResumeBackend, ResumeIdentity, ScreeningResult,
};
use crate::error::ClientError;
use tracing::{error, info};

/// Job description keywords and the scores of the last screening run.
#[derive(Debug, Default)]
pub struct ScreeningPanel {
    /// Text being edited in the job description box.
    pub draft: String,
    keywords: Vec<String>,
    results: Vec<ScreeningResult>,
    notice: Option<String>,
    busy: bool,
}

impl ScreeningPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn results(&self) -> &[ScreeningResult] {
        &self.results
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn begin(&mut self) {
        self.busy = true;
        self.notice = None;
    }

    /// Marks a keyword reload in flight, keeping the notice of the update that caused it.
    pub fn begin_reload(&mut self) {
        self.busy = true;
    }

    pub fn begin_screening(
        &mut self,
        selected: Vec<ResumeIdentity>,
    ) -> Result<Vec<ResumeIdentity>, ClientError> {
        if selected.is_empty() {
            return Err(ClientError::NoResumesSelected);
        }
        info!("Screening {} resume(s)", selected.len());
        self.begin();
        Ok(selected)
    }

    pub async fn screen(
        backend: &dyn ResumeBackend,
        ids: &[ResumeIdentity],
    ) -> Result<Vec<ScreeningResult>, ClientError> {
        let response = backend.screen_resumes(ids).await?;
        if let Some(message) = response.error {
            return Err(ClientError::Application(message));
        }
        Ok(response.results)
    }

    /// Returns the alert to show, if any.
    pub fn finish_screening(
        &mut self,
        result: Result<Vec<ScreeningResult>, ClientError>,
    ) -> Option<String> {
        self.busy = false;
        match result {
            Ok(results) => {
                info!("Screening returned {} result(s)", results.len());
                self.results = results;
                None
            }
            Err(e) => {
                error!("Screening failed: {}", e);
                Some(format!("Screening failed: {}", e.user_message()))
            }
        }
    }

    pub fn finish_keywords(
        &mut self,
        result: Result<JobDescriptionResponse, ClientError>,
    ) -> Option<String> {
        self.busy = false;
        match result {
            Ok(response) => {
                self.keywords = response.job_description;
                self.keywords.sort();
                None
            }
            Err(e) => {
                error!("Loading job description failed: {}", e);
                Some(format!("Failed to load job description: {}", e.user_message()))
            }
        }
    }

    /// Handles the reply to a set or clear request. On success the caller reloads the keywords.
    pub fn finish_update(&mut self, result: Result<MessageResponse, ClientError>) -> Option<String> {
        self.busy = false;
        let outcome = result.and_then(|response| match response.error {
            Some(message) => Err(ClientError::Application(message)),
            None => Ok(response.message),
        });

        match outcome {
            Ok(message) => {
                self.notice = message;
                None
            }
            Err(e) => {
                error!("Job description update failed: {}", e);
                Some(format!("Job description update failed: {}", e.user_message()))
            }
        }
    }
}
