use super::UploadDashboard;
use super::UploadProgress;
use crate::api::UploadCandidate;
use crate::utils::{format_timestamp, FileSizeUtils, StatusCategory};
use eframe::egui::{self, Align, Align2, Color32, RichText};
use rfd::FileDialog;
use tracing::warn;

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);

impl UploadDashboard {
    pub fn render(&mut self, ctx: &egui::Context) {
        self.render_alert(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let footer_margin = 15.0;
            let content_height = total_height - footer_height - footer_margin;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("File Upload & Processing Platform");
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("Upload a file and follow its processing status")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);
                    self.render_upload_section(ui);

                    let status_text = self.state.progress.status_text();
                    if !status_text.is_empty() {
                        ui.add_space(10.0);
                        ui.vertical_centered(|ui| {
                            let color = match &self.state.progress {
                                UploadProgress::Succeeded { .. } => Color32::from_rgb(0, 180, 0),
                                UploadProgress::Failed { .. }
                                | UploadProgress::Unreadable { .. } => {
                                    Color32::from_rgb(220, 50, 50)
                                }
                                _ => ui.visuals().text_color(),
                            };
                            ui.colored_label(color, status_text);
                        });
                    }

                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.label(self.state.stats().summary());
                    });

                    ui.add_space(10.0);
                    ui.heading("File Status");
                    ui.add_space(5.0);
                    self.render_files_table(ui);

                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(footer_margin);
                self.render_footer(ui);
            });
        });
    }

    fn render_upload_section(&mut self, ui: &mut egui::Ui) {
        let busy = self.state.is_uploading();

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.add_enabled_ui(!busy, |ui| {
                    if ui.button("📁 Choose File").clicked() {
                        if let Some(path) = FileDialog::new().pick_file() {
                            match UploadCandidate::from_path(&path) {
                                Ok(candidate) => self.select_file(candidate),
                                Err(e) => self
                                    .reject_selection(format!("{}: {}", path.display(), e)),
                            }
                        }
                    }
                });

                match self.state.candidate_label() {
                    Some(label) => ui.label(format!("Selected: {}", label)),
                    None => ui.label(
                        RichText::new("No file chosen")
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    ),
                };
            });
        });

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            let can_upload = !busy && self.state.candidate.is_some();
            let label = if busy { "⏳ Uploading..." } else { "📤 Upload File" };

            ui.add_enabled_ui(can_upload, |ui| {
                let button = egui::Button::new(label).min_size(egui::vec2(200.0, 40.0));
                if ui.add(button).clicked() {
                    self.submit();
                }
            });
        });
    }

    fn render_files_table(&self, ui: &mut egui::Ui) {
        if self.state.files.is_empty() {
            ui.label(
                RichText::new("No files uploaded yet.")
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
            return;
        }

        egui::Frame::none()
            .fill(ui.style().visuals.extreme_bg_color)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("files_table")
                    .num_columns(5)
                    .striped(true)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        for header in ["Filename", "Upload Time", "Status", "Size", "File ID"] {
                            ui.label(RichText::new(header).strong());
                        }
                        ui.end_row();

                        for file in &self.state.files {
                            ui.label(file.filename.as_deref().unwrap_or(""));
                            ui.label(format_timestamp(file.upload_time.as_deref()));

                            let category = StatusCategory::from_status(file.status.as_deref());
                            ui.colored_label(
                                category.color(),
                                file.status.as_deref().unwrap_or("Unknown"),
                            );

                            ui.label(FileSizeUtils::format_size(file.file_size));
                            ui.label(
                                RichText::new(file.identifier().unwrap_or(""))
                                    .monospace()
                                    .small(),
                            );
                            ui.end_row();
                        }
                    });
            });
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.state.alert.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.dismiss_alert();
        }
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label("API Endpoint:");
                if ui
                    .add(
                        egui::Label::new(RichText::new(&self.config.base_url).color(ACCENT))
                            .sense(egui::Sense::click()),
                    )
                    .clicked()
                {
                    if let Err(e) = open::that(&self.config.base_url) {
                        warn!("Failed to open link: {}", e);
                    }
                }
            });
            ui.label(
                RichText::new(format!(
                    "Auto-refresh every {} seconds",
                    self.schedule.interval().as_secs()
                ))
                .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
        });
    }
}
