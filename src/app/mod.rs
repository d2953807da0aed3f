mod controller;
mod events;
mod launcher;
mod state;
mod ui;

use crate::api::ResumeBackend;
pub use controller::Controller;
use eframe::{egui, App};
use launcher::SystemLauncher;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::info;

pub struct ResumeUploaderApp {
    controller: Controller,
    backend_label: String,
    // Owns the worker threads; dropped with the window.
    _runtime: Runtime,
}

impl ResumeUploaderApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        runtime: Runtime,
        backend: Arc<dyn ResumeBackend>,
        backend_label: String,
    ) -> Self {
        info!("Initializing Resume Uploader against {}", backend_label);
        let mut controller =
            Controller::new(runtime.handle().clone(), backend, Arc::new(SystemLauncher));
        controller.refresh_gallery();

        Self {
            controller,
            backend_label,
            _runtime: runtime,
        }
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) =
            ctx.input(|i| (!i.raw.hovered_files.is_empty(), i.raw.dropped_files.clone()));
        self.controller.handle_file_drop(hovering, dropped);

        if self.controller.poll_events() {
            ctx.request_repaint();
        }
        // background requests report through a channel, so keep polling
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

impl App for ResumeUploaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
