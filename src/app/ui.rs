use super::ResumeUploaderApp;
use crate::api::ResumeIdentity;
use crate::gallery::{GalleryContent, EMPTY_GALLERY};
use crate::selection::{PendingRow, NO_FILES_PLACEHOLDER};
use eframe::egui::{self, Align2, Color32, RichText};
use rfd::FileDialog;

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);
const SUCCESS: Color32 = Color32::from_rgb(0, 180, 0);
const FAILURE: Color32 = Color32::from_rgb(220, 50, 50);
const MUTED: Color32 = Color32::from_rgb(150, 150, 150);

/// Clicks collected while drawing, applied once the frame is laid out.
enum UiAction {
    PickFiles,
    Submit,
    Refresh,
    View(ResumeIdentity),
    Download(ResumeIdentity),
    ToggleCard(ResumeIdentity),
    Screen,
    SaveJobDescription,
    LoadJobDescription,
    ClearJobDescription,
    ToggleDetails,
    DismissAlert,
}

impl ResumeUploaderApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        let mut actions = Vec::new();
        let modal_open = self.controller.state.current_alert().is_some();

        egui::SidePanel::left("upload_panel")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal_open, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        self.render_upload(ui, &mut actions);
                        ui.add_space(20.0);
                        self.render_screening(ui, &mut actions);
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                self.render_gallery(ui, &mut actions);
            });
        });

        if let Some(message) = self.controller.state.current_alert() {
            egui::Window::new("Notice")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            actions.push(UiAction::DismissAlert);
                        }
                    });
                });
        }

        for action in actions {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: UiAction) {
        let controller = &mut self.controller;
        match action {
            UiAction::PickFiles => {
                if let Some(paths) = FileDialog::new().set_title("Select resumes").pick_files() {
                    controller.select_paths(paths);
                }
            }
            UiAction::Submit => controller.submit(),
            UiAction::Refresh => controller.refresh_gallery(),
            UiAction::View(id) => controller.view(&id),
            UiAction::Download(id) => controller.download(&id),
            UiAction::ToggleCard(id) => controller.toggle_card(&id),
            UiAction::Screen => controller.screen_selected(),
            UiAction::SaveJobDescription => controller.save_job_description(),
            UiAction::LoadJobDescription => controller.load_job_description(),
            UiAction::ClearJobDescription => controller.clear_job_description(),
            UiAction::ToggleDetails => {
                controller.state.show_details = !controller.state.show_details
            }
            UiAction::DismissAlert => controller.state.dismiss_alert(),
        }
    }

    fn render_upload(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let state = &self.controller.state;

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.heading("Upload Resumes");
            ui.label(
                RichText::new(format!("Backend: {}", self.backend_label))
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
        });
        ui.add_space(10.0);

        let (fill, stroke) = if state.selection.drop_zone_active() {
            (ACCENT.gamma_multiply(0.2), ACCENT)
        } else {
            (ui.visuals().extreme_bg_color, MUTED)
        };
        let drop_zone = egui::Frame::group(ui.style())
            .fill(fill)
            .stroke(egui::Stroke::new(2.0, stroke))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(ui.available_width(), 90.0));
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label("📁 Drop resumes here or click to browse");
                });
            })
            .response
            .interact(egui::Sense::click());
        if drop_zone.clicked() {
            actions.push(UiAction::PickFiles);
        }

        ui.add_space(8.0);
        for row in state.selection.rows() {
            match row {
                PendingRow::Placeholder => {
                    ui.colored_label(MUTED, NO_FILES_PLACEHOLDER);
                }
                PendingRow::File { label, badge } => {
                    ui.horizontal(|ui| {
                        ui.label(label);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(badge).color(ACCENT).small());
                        });
                    });
                }
            }
        }

        ui.add_space(10.0);
        let busy = state.upload.is_busy();
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let button = egui::Button::new("📤 Upload").min_size(egui::vec2(160.0, 36.0));
                if ui.add_enabled(!busy, button).clicked() {
                    actions.push(UiAction::Submit);
                }
                if busy {
                    ui.add(egui::Spinner::new());
                }
            });
        });

        if busy {
            ui.add(egui::ProgressBar::new(0.0).animate(true).fill(ACCENT));
        }

        let status = state.upload.status_text();
        if !status.is_empty() {
            ui.label(status);
        }

        if !state.upload.last_results().is_empty() {
            ui.add_space(6.0);
            self.render_details(ui, actions);
        }
    }

    fn render_details(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let state = &self.controller.state;
        if ui
            .button(if state.show_details {
                "Hide Details"
            } else {
                "Show Details"
            })
            .clicked()
        {
            actions.push(UiAction::ToggleDetails);
        }

        if state.show_details {
            egui::Frame::none()
                .fill(ui.style().visuals.extreme_bg_color)
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    for result in state.upload.last_results() {
                        ui.horizontal_wrapped(|ui| match &result.error {
                            None => {
                                ui.label("✅");
                                ui.colored_label(SUCCESS, &result.filename);
                                if let Some(score) = result.resume_score {
                                    ui.label(format!("score {:.2}", score));
                                }
                            }
                            Some(err) => {
                                ui.label("❌");
                                ui.colored_label(
                                    FAILURE,
                                    format!("{} - {}", result.filename, err),
                                );
                            }
                        });
                        if !result.missing_requirements.is_empty() {
                            ui.colored_label(
                                MUTED,
                                format!("missing: {}", result.missing_requirements.join(", ")),
                            );
                        }
                        ui.add_space(4.0);
                    }
                });
        }
    }

    fn render_screening(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let screening = &mut self.controller.state.screening;

        ui.separator();
        ui.heading("Job Description");
        ui.add_space(4.0);
        ui.add_sized(
            [ui.available_width(), 100.0],
            egui::TextEdit::multiline(&mut screening.draft)
                .hint_text("Paste the job description to screen against"),
        );

        let busy = screening.is_busy();
        ui.horizontal(|ui| {
            if ui.add_enabled(!busy, egui::Button::new("💾 Save")).clicked() {
                actions.push(UiAction::SaveJobDescription);
            }
            if ui.add_enabled(!busy, egui::Button::new("🔄 Load")).clicked() {
                actions.push(UiAction::LoadJobDescription);
            }
            if ui.add_enabled(!busy, egui::Button::new("🗑 Clear")).clicked() {
                actions.push(UiAction::ClearJobDescription);
            }
            if busy {
                ui.add(egui::Spinner::new());
            }
        });

        if let Some(notice) = screening.notice() {
            ui.colored_label(SUCCESS, notice);
        }
        if !screening.keywords().is_empty() {
            ui.label(
                RichText::new(format!("Keywords: {}", screening.keywords().join(", "))).small(),
            );
        }

        ui.add_space(8.0);
        if ui
            .add_enabled(!busy, egui::Button::new("🔍 Screen selected resumes"))
            .clicked()
        {
            actions.push(UiAction::Screen);
        }

        for result in screening.results() {
            ui.group(|ui| {
                ui.label(RichText::new(&result.filename).strong());
                match (&result.error, result.score) {
                    (Some(err), _) => {
                        ui.colored_label(FAILURE, err);
                    }
                    (None, Some(score)) => {
                        ui.label(format!("Score: {:.2}%", score));
                    }
                    (None, None) => {
                        ui.colored_label(MUTED, "No score");
                    }
                }
                if !result.missing_requirements.is_empty() {
                    ui.colored_label(
                        MUTED,
                        format!("Missing: {}", result.missing_requirements.join(", ")),
                    );
                }
            });
        }
    }

    fn render_gallery(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let gallery = &self.controller.state.gallery;

        ui.horizontal(|ui| {
            ui.heading("Uploaded Resumes");
            if ui.button("🔄 Refresh").clicked() {
                actions.push(UiAction::Refresh);
            }
        });
        ui.add_space(10.0);

        match gallery.content() {
            GalleryContent::NotLoaded | GalleryContent::Failed => {}
            GalleryContent::Loading => {
                ui.add(egui::Spinner::new());
            }
            GalleryContent::Empty => {
                ui.vertical_centered(|ui| {
                    ui.colored_label(MUTED, EMPTY_GALLERY);
                });
            }
            GalleryContent::Cards(cards) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for card in cards {
                            ui.allocate_ui(egui::vec2(280.0, 220.0), |ui| {
                                egui::Frame::group(ui.style()).show(ui, |ui| {
                                    ui.set_width(260.0);
                                    let mut selected = card.selected;
                                    if ui
                                        .checkbox(&mut selected, RichText::new(card.id.as_str()).strong())
                                        .changed()
                                    {
                                        actions.push(UiAction::ToggleCard(card.id.clone()));
                                    }
                                    ui.horizontal(|ui| {
                                        if ui.button("View").clicked() {
                                            actions.push(UiAction::View(card.id.clone()));
                                        }
                                        if ui.button("Download").clicked() {
                                            actions.push(UiAction::Download(card.id.clone()));
                                        }
                                    });
                                    if let Some(preview) = card.preview() {
                                        egui::ScrollArea::vertical()
                                            .id_source(card.id.as_str())
                                            .max_height(120.0)
                                            .show(ui, |ui| {
                                                ui.label(RichText::new(preview).small());
                                            });
                                    }
                                });
                            });
                        }
                    });
                });
            }
        }
    }
}
