use crate::gallery::ResumeGallery;
use crate::screening::ScreeningPanel;
use crate::selection::SelectionManager;
use crate::upload::UploadCoordinator;
use derivative::Derivative;
use std::collections::VecDeque;
use tempfile::TempPath;

/// Everything the window shows. Only the UI thread touches it.
#[derive(Derivative)]
#[derivative(Debug, Default)]
pub struct AppState {
    pub selection: SelectionManager,
    pub upload: UploadCoordinator,
    pub gallery: ResumeGallery,
    pub screening: ScreeningPanel,
    /// Modal notifications, shown one at a time in arrival order.
    pub alerts: VecDeque<String>,
    pub show_details: bool,
    /// Temporary copies opened for viewing; deleted when the app exits.
    #[derivative(Debug = "ignore")]
    pub viewed_files: Vec<TempPath>,
}

impl AppState {
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push_back(message.into());
    }

    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }
}
