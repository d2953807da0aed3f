use crate::api::{ResumeBackend, ResumeIdentity};
use crate::error::ClientError;
use std::io::Write;
use std::path::Path;
use tempfile::TempPath;
use tracing::debug;

/// Downloads a resume into a temporary file named after its extension, so the
/// system viewer picks the right application. The file is removed when the
/// returned path is dropped.
pub async fn fetch_to_temp_file(
    backend: &dyn ResumeBackend,
    id: &ResumeIdentity,
) -> Result<TempPath, ClientError> {
    let bytes = backend.resume_content(id).await?;

    let suffix = Path::new(id.as_str())
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let mut file = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(&suffix)
        .tempfile()?;
    file.write_all(&bytes)?;
    file.flush()?;

    debug!("Wrote {} ({} bytes) to {}", id, bytes.len(), file.path().display());
    Ok(file.into_temp_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeBackend};

    #[tokio::test]
    async fn writes_content_with_matching_extension() {
        let backend = FakeBackend::default();
        backend.set_content("cv #1.pdf", b"%PDF-1.4 fake");

        let path = fetch_to_temp_file(&backend, &ResumeIdentity::new("cv #1.pdf"))
            .await
            .unwrap();

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 fake");
        assert_eq!(backend.calls(), vec![Call::Content("cv #1.pdf".to_string())]);

        let kept = path.to_path_buf();
        drop(path);
        assert!(!kept.exists());
    }

    #[tokio::test]
    async fn backend_failure_is_reported() {
        let backend = FakeBackend::default();
        let err = fetch_to_temp_file(&backend, &ResumeIdentity::new("missing.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
    }
}
