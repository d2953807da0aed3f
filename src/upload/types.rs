#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading {
        files: usize,
    },
    Completed {
        successful: usize,
        failed: usize,
    },
    Failed,
}

/// What the rest of the window has to do once an upload round-trip is over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOutcome {
    pub alerts: Vec<String>,
    pub clear_selection: bool,
    pub refresh_gallery: bool,
}
