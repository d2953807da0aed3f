use super::types::{UploadOutcome, UploadPhase};
use crate::api::{ResumeBackend, UploadResult};
use crate::error::ClientError;
use crate::selection::PendingFile;
use tracing::{error, info, warn};

pub const NO_FILES_UPLOADED: &str = "No files were uploaded";

/// Drives one multipart submission at a time and turns its results into user messages.
#[derive(Debug, Default)]
pub struct UploadCoordinator {
    phase: UploadPhase,
    last_results: Vec<UploadResult>,
}

impl UploadCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, UploadPhase::Uploading { .. })
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn last_results(&self) -> &[UploadResult] {
        &self.last_results
    }

    /// Checks the precondition and marks the coordinator busy.
    ///
    /// Returns the files to send; an empty selection never reaches the network.
    pub fn begin(&mut self, selected: &[PendingFile]) -> Result<Vec<PendingFile>, ClientError> {
        if self.is_busy() {
            return Err(ClientError::UploadInProgress);
        }
        if selected.is_empty() {
            warn!("Submit pressed with no files selected");
            return Err(ClientError::NoFilesSelected);
        }

        info!("Starting upload of {} file(s)", selected.len());
        self.phase = UploadPhase::Uploading {
            files: selected.len(),
        };
        self.last_results.clear();
        Ok(selected.to_vec())
    }

    /// The network half: sends the batch and unwraps the per-file results.
    pub async fn submit(
        backend: &dyn ResumeBackend,
        files: &[PendingFile],
    ) -> Result<Vec<UploadResult>, ClientError> {
        let response = backend.upload_resumes(files).await?;
        if let Some(message) = response.error {
            return Err(ClientError::Application(message));
        }
        Ok(response.results.unwrap_or_default())
    }

    /// Clears the busy state on every path and decides what the window does next.
    pub fn finish(&mut self, result: Result<Vec<UploadResult>, ClientError>) -> UploadOutcome {
        match result {
            Ok(results) => {
                let successful = results.iter().filter(|r| r.succeeded()).count();
                let failed = results.len() - successful;
                info!(
                    "Upload finished: {} succeeded, {} failed",
                    successful, failed
                );

                let alerts = Self::summarize(&results);
                self.phase = UploadPhase::Completed { successful, failed };
                self.last_results = results;

                UploadOutcome {
                    alerts,
                    clear_selection: true,
                    refresh_gallery: true,
                }
            }
            Err(e) => {
                error!("Upload error: {}", e);
                self.phase = UploadPhase::Failed;
                UploadOutcome {
                    alerts: vec![format!("Upload failed: {}", e.user_message())],
                    clear_selection: false,
                    refresh_gallery: false,
                }
            }
        }
    }

    /// One message per non-empty partition, or a single "nothing uploaded" note.
    pub fn summarize(results: &[UploadResult]) -> Vec<String> {
        if results.is_empty() {
            return vec![NO_FILES_UPLOADED.to_string()];
        }

        let (succeeded, failed): (Vec<_>, Vec<_>) = results.iter().partition(|r| r.succeeded());
        let mut alerts = Vec::new();

        if !succeeded.is_empty() {
            alerts.push(format!(
                "Successfully uploaded {} file(s)",
                succeeded.len()
            ));
        }
        if !failed.is_empty() {
            let itemized = failed
                .iter()
                .map(|r| format!("{}: {}", r.filename, r.error.as_deref().unwrap_or_default()))
                .collect::<Vec<_>>()
                .join("\n");
            alerts.push(format!(
                "Failed to upload {} file(s):\n{}",
                failed.len(),
                itemized
            ));
        }

        alerts
    }

    pub fn status_text(&self) -> String {
        match &self.phase {
            UploadPhase::Idle => String::new(),
            UploadPhase::Uploading { files } => format!("📤 Uploading {} file(s)...", files),
            UploadPhase::Completed { successful, failed } => format!(
                "Last upload | ✅ Success: {} | ❌ Failed: {}",
                successful, failed
            ),
            UploadPhase::Failed => "❌ Last upload failed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeBackend};
    use crate::api::UploadResponse;
    use std::path::PathBuf;

    fn pending(name: &str) -> PendingFile {
        PendingFile {
            name: name.to_string(),
            size_bytes: 100,
            path: PathBuf::from(name),
        }
    }

    fn result(filename: &str, error: Option<&str>) -> UploadResult {
        UploadResult {
            filename: filename.to_string(),
            error: error.map(str::to_string),
            resume_score: None,
            missing_requirements: Vec::new(),
            save_path: None,
        }
    }

    #[test]
    fn begin_with_no_files_is_rejected_and_stays_idle() {
        let mut coordinator = UploadCoordinator::new();
        let err = coordinator.begin(&[]).unwrap_err();
        assert!(matches!(err, ClientError::NoFilesSelected));
        assert_eq!(err.to_string(), "Please select at least one file to upload");
        assert!(!coordinator.is_busy());
    }

    #[test]
    fn begin_marks_busy_and_blocks_second_submit() {
        let mut coordinator = UploadCoordinator::new();
        let files = coordinator.begin(&[pending("a.pdf")]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(coordinator.is_busy());
        assert!(matches!(
            coordinator.begin(&[pending("b.pdf")]),
            Err(ClientError::UploadInProgress)
        ));
    }

    #[test]
    fn mixed_results_report_both_partitions() {
        let mut coordinator = UploadCoordinator::new();
        coordinator.begin(&[pending("a.pdf"), pending("b.pdf")]).unwrap();

        let outcome = coordinator.finish(Ok(vec![
            result("a.pdf", None),
            result("b.pdf", Some("too large")),
        ]));

        assert_eq!(outcome.alerts.len(), 2);
        assert_eq!(outcome.alerts[0], "Successfully uploaded 1 file(s)");
        assert!(outcome.alerts[1].starts_with("Failed to upload 1 file(s):"));
        assert!(outcome.alerts[1].contains("b.pdf"));
        assert!(outcome.alerts[1].contains("too large"));
        assert!(outcome.clear_selection);
        assert!(outcome.refresh_gallery);
        assert!(!coordinator.is_busy());
        assert_eq!(
            coordinator.phase(),
            &UploadPhase::Completed {
                successful: 1,
                failed: 1
            }
        );
    }

    #[test]
    fn empty_results_still_refresh() {
        let mut coordinator = UploadCoordinator::new();
        coordinator.begin(&[pending("a.pdf")]).unwrap();
        let outcome = coordinator.finish(Ok(Vec::new()));
        assert_eq!(outcome.alerts, vec![NO_FILES_UPLOADED.to_string()]);
        assert!(outcome.refresh_gallery);
        assert!(outcome.clear_selection);
    }

    #[test]
    fn failure_keeps_selection_and_clears_busy() {
        let mut coordinator = UploadCoordinator::new();
        coordinator.begin(&[pending("a.pdf")]).unwrap();
        let outcome = coordinator.finish(Err(ClientError::Status {
            status: 500,
            message: None,
        }));
        assert_eq!(
            outcome.alerts,
            vec!["Upload failed: Request failed with status 500".to_string()]
        );
        assert!(!outcome.clear_selection);
        assert!(!outcome.refresh_gallery);
        assert!(!coordinator.is_busy());
        assert_eq!(coordinator.phase(), &UploadPhase::Failed);
    }

    #[test]
    fn itemizes_every_failure() {
        let alerts = UploadCoordinator::summarize(&[
            result("x.txt", Some("Unsupported file type")),
            result("y.png", Some("Unsupported file type")),
        ]);
        assert_eq!(
            alerts,
            vec![
                "Failed to upload 2 file(s):\nx.txt: Unsupported file type\ny.png: Unsupported file type"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn top_level_error_is_total_failure() {
        let backend = FakeBackend::default();
        backend.set_upload_response(Ok(UploadResponse {
            error: Some("Maximum of 10 files allowed per upload".to_string()),
            ..Default::default()
        }));

        let err = UploadCoordinator::submit(&backend, &[pending("a.pdf")])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Maximum of 10 files allowed per upload");
        assert_eq!(backend.calls(), vec![Call::Upload(vec!["a.pdf".to_string()])]);
    }

    #[tokio::test]
    async fn missing_results_count_as_empty() {
        let backend = FakeBackend::default();
        backend.set_upload_response(Ok(UploadResponse::default()));
        let results = UploadCoordinator::submit(&backend, &[pending("a.pdf")])
            .await
            .unwrap();
        assert!(results.is_empty());
    }
}
