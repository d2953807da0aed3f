use crate::utils::FileSizeUtils;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const NO_FILES_PLACEHOLDER: &str = "No files selected";
pub const PENDING_BADGE: &str = "Pending";

/// A file picked by the user but not submitted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub size_bytes: u64,
    pub path: PathBuf,
}

impl PendingFile {
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            size_bytes: metadata.len(),
            path: path.to_path_buf(),
        })
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.name, FileSizeUtils::format_kib(self.size_bytes))
    }
}

/// One row of the pending list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRow {
    Placeholder,
    File { label: String, badge: &'static str },
}

/// Owns the current selection. `None` means the list is cleared and shows nothing.
#[derive(Debug, Default)]
pub struct SelectionManager {
    selection: Option<Vec<PendingFile>>,
    drop_zone_active: bool,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pending set with `files`.
    pub fn select(&mut self, files: Vec<PendingFile>) {
        debug!("Selected {} file(s)", files.len());
        self.selection = Some(files);
    }

    /// Resolves local paths into pending files and selects them.
    ///
    /// Paths whose metadata cannot be read are returned as errors so the caller
    /// can tell the user; they are not part of the new selection.
    pub fn select_paths(&mut self, paths: Vec<PathBuf>) -> Vec<(PathBuf, io::Error)> {
        let mut files = Vec::with_capacity(paths.len());
        let mut rejected = Vec::new();

        for path in paths {
            match PendingFile::from_path(&path) {
                Ok(file) => files.push(file),
                Err(e) => {
                    warn!("Cannot read {}: {}", path.display(), e);
                    rejected.push((path, e));
                }
            }
        }

        self.select(files);
        rejected
    }

    /// Current selection, re-read by the upload coordinator at submit time.
    pub fn files(&self) -> &[PendingFile] {
        self.selection.as_deref().unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        self.selection = None;
    }

    pub fn rows(&self) -> Vec<PendingRow> {
        match &self.selection {
            None => Vec::new(),
            Some(files) if files.is_empty() => vec![PendingRow::Placeholder],
            Some(files) => files
                .iter()
                .map(|file| PendingRow::File {
                    label: file.label(),
                    badge: PENDING_BADGE,
                })
                .collect(),
        }
    }

    /// Highlight on drag enter/over, clear on leave/drop.
    pub fn set_drop_zone_active(&mut self, active: bool) {
        self.drop_zone_active = active;
    }

    pub fn drop_zone_active(&self) -> bool {
        self.drop_zone_active
    }
}
