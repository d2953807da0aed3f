use super::events::{Event, TaskSpawner};
use super::launcher::Launcher;
use super::state::AppState;
use crate::api::{ResumeBackend, ResumeIdentity};
use crate::gallery::{self, DOWNLOAD_FAILED, VIEW_FAILED};
use crate::screening::ScreeningPanel;
use crate::upload::UploadCoordinator;
use derivative::Derivative;
use eframe::egui::DroppedFile;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, error, info};

/// Turns user actions into requests and applies their results to the state.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Controller {
    pub state: AppState,
    #[derivative(Debug = "ignore")]
    tasks: TaskSpawner,
    events: Receiver<Event>,
    #[derivative(Debug = "ignore")]
    launcher: Arc<dyn Launcher>,
}

impl Controller {
    pub fn new(handle: Handle, backend: Arc<dyn ResumeBackend>, launcher: Arc<dyn Launcher>) -> Self {
        let (sender, events) = channel();
        Self {
            state: AppState::default(),
            tasks: TaskSpawner::new(handle, sender, backend),
            events,
            launcher,
        }
    }

    pub fn select_paths(&mut self, paths: Vec<PathBuf>) {
        for (path, e) in self.state.selection.select_paths(paths) {
            self.state
                .alert(format!("Cannot read {}: {}", path.display(), e));
        }
    }

    /// Highlights the drop zone while files hover over the window. Dropped files replace the selection.
    pub fn handle_file_drop(&mut self, hovering: bool, dropped: Vec<DroppedFile>) {
        if dropped.is_empty() {
            self.state.selection.set_drop_zone_active(hovering);
            return;
        }

        self.state.selection.set_drop_zone_active(false);
        let mut paths = Vec::with_capacity(dropped.len());
        for file in dropped {
            match file.path {
                Some(path) => paths.push(path),
                None => self
                    .state
                    .alert(format!("Cannot read {}: no local path", file.name)),
            }
        }
        self.select_paths(paths);
    }

    pub fn submit(&mut self) {
        let files = match self.state.upload.begin(self.state.selection.files()) {
            Ok(files) => files,
            Err(e) => {
                self.state.alert(e.to_string());
                return;
            }
        };

        let backend = self.tasks.backend();
        self.tasks.spawn(
            async move { UploadCoordinator::submit(backend.as_ref(), &files).await },
            Event::UploadFinished,
        );
    }

    pub fn refresh_gallery(&mut self) {
        let generation = self.state.gallery.begin_refresh();
        let backend = self.tasks.backend();
        self.tasks.spawn(
            async move { backend.list_resumes().await },
            move |result| Event::ListingLoaded { generation, result },
        );
    }

    fn load_preview(&self, generation: u64, id: ResumeIdentity) {
        let backend = self.tasks.backend();
        let request_id = id.clone();
        self.tasks.spawn(
            async move { backend.resume_preview(&request_id).await },
            move |result| Event::PreviewLoaded {
                generation,
                id,
                result,
            },
        );
    }

    pub fn view(&mut self, id: &ResumeIdentity) {
        info!("Viewing {}", id);
        let backend = self.tasks.backend();
        let request_id = id.clone();
        let id = id.clone();
        self.tasks.spawn(
            async move { gallery::fetch_to_temp_file(backend.as_ref(), &request_id).await },
            move |result| Event::ResumeFetched { id, result },
        );
    }

    pub fn download(&mut self, id: &ResumeIdentity) {
        let url = self.tasks.backend().download_url(id);
        info!("Downloading {} via {}", id, url);
        if let Err(e) = self.launcher.open_url(&url) {
            error!("Error downloading resume: {}", e);
            self.state.alert(DOWNLOAD_FAILED);
        }
    }

    pub fn toggle_card(&mut self, id: &ResumeIdentity) {
        self.state.gallery.toggle_selected(id);
    }

    pub fn screen_selected(&mut self) {
        let selected = self.state.gallery.selected_ids();
        let ids = match self.state.screening.begin_screening(selected) {
            Ok(ids) => ids,
            Err(e) => {
                self.state.alert(e.to_string());
                return;
            }
        };

        let backend = self.tasks.backend();
        self.tasks.spawn(
            async move { ScreeningPanel::screen(backend.as_ref(), &ids).await },
            Event::ScreeningFinished,
        );
    }

    pub fn save_job_description(&mut self) {
        self.state.screening.begin();
        let text = self.state.screening.draft.clone();
        let backend = self.tasks.backend();
        self.tasks.spawn(
            async move { backend.set_job_description(&text).await },
            Event::JobDescriptionUpdated,
        );
    }

    pub fn clear_job_description(&mut self) {
        self.state.screening.begin();
        let backend = self.tasks.backend();
        self.tasks.spawn(
            async move { backend.clear_job_description().await },
            Event::JobDescriptionUpdated,
        );
    }

    pub fn load_job_description(&mut self) {
        self.state.screening.begin();
        self.fetch_keywords();
    }

    fn fetch_keywords(&self) {
        let backend = self.tasks.backend();
        self.tasks.spawn(
            async move { backend.job_description().await },
            Event::KeywordsLoaded,
        );
    }

    /// Applies every finished request. Returns whether anything changed.
    pub fn poll_events(&mut self) -> bool {
        let mut had_updates = false;
        while let Ok(event) = self.events.try_recv() {
            had_updates = true;
            self.handle_event(event);
        }
        had_updates
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::UploadFinished(result) => {
                let outcome = self.state.upload.finish(result);
                for alert in outcome.alerts {
                    self.state.alert(alert);
                }
                if outcome.clear_selection {
                    self.state.selection.clear();
                }
                if outcome.refresh_gallery {
                    self.refresh_gallery();
                }
            }
            Event::ListingLoaded { generation, result } => {
                let outcome = self.state.gallery.apply_listing(generation, result);
                if let Some(alert) = outcome.alert {
                    self.state.alert(alert);
                }
                for id in outcome.previews_to_load {
                    self.load_preview(generation, id);
                }
            }
            Event::PreviewLoaded {
                generation,
                id,
                result,
            } => {
                if self.state.gallery.apply_preview(generation, &id, result) {
                    debug!("Preview shown for {}", id);
                }
            }
            Event::ResumeFetched { id, result } => match result {
                Ok(path) => match self.launcher.open_path(&path) {
                    Ok(()) => self.state.viewed_files.push(path),
                    Err(e) => {
                        error!("Error opening {}: {}", id, e);
                        self.state.alert(VIEW_FAILED);
                    }
                },
                Err(e) => {
                    error!("Error viewing resume {}: {}", id, e);
                    self.state.alert(VIEW_FAILED);
                }
            },
            Event::ScreeningFinished(result) => {
                if let Some(alert) = self.state.screening.finish_screening(result) {
                    self.state.alert(alert);
                }
            }
            Event::KeywordsLoaded(result) => {
                if let Some(alert) = self.state.screening.finish_keywords(result) {
                    self.state.alert(alert);
                }
            }
            Event::JobDescriptionUpdated(result) => {
                match self.state.screening.finish_update(result) {
                    Some(alert) => self.state.alert(alert),
                    None => {
                        self.state.screening.begin_reload();
                        self.fetch_keywords();
                    }
                }
            }
        }
    }
}
