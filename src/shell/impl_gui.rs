use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::session::main::Session;
use crate::shell::preview::{decode_preview, preview_side};
use crate::shell::state::{Notice, ShellState, View, ABOUT_TEXT, NO_UPLOADS_TEXT};
use crate::upload::Upload;
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

enum Preview {
    Ready(egui::TextureHandle),
    Unavailable,
}

pub struct ShellGui {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    session: Session,
    state: ShellState,
    previews: HashMap<String, Preview>,
    path_input: String,
}

impl ShellGui {
    pub fn new(config: Config, logger: Arc<dyn Logger + Send + Sync>, session: Session) -> Self {
        let mut state = ShellState::new(&config);
        state.history = session.history().to_vec();

        Self {
            state,
            config,
            logger: logger.with_namespace("shell"),
            session,
            previews: HashMap::new(),
            path_input: String::new(),
        }
    }

    fn add_upload(&mut self, upload: Upload) {
        let name = upload.name.clone();
        if self.state.add_upload(upload) {
            // Same name means new content, so the cached preview is stale.
            self.previews.remove(&name);
            let _ = self.logger.info(&format!("Uploaded {}", name));
        }
    }

    fn add_upload_from_path(&mut self, path: &Path) {
        match Upload::from_path(path) {
            Ok(upload) => self.add_upload(upload),
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("Could not read {}: {}", path.display(), e));
                self.state.notice = Some(Notice::Error(format!(
                    "Could not read {}: {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());

        for file in dropped {
            match (file.bytes, file.path) {
                (Some(bytes), _) => self.add_upload(Upload::new(file.name, bytes)),
                (None, Some(path)) => self.add_upload_from_path(&path),
                (None, None) => {}
            }
        }
    }

    fn preview(&mut self, ctx: &egui::Context, upload: &Upload) -> Option<egui::TextureHandle> {
        let max_texture_side = ctx.input(|i| i.max_texture_side);
        let side = preview_side(max_texture_side, self.config.preview_width);

        let preview = self
            .previews
            .entry(upload.name.clone())
            .or_insert_with(|| match decode_preview(&upload.bytes, side) {
                Some(rgba) => {
                    let size = [rgba.width() as usize, rgba.height() as usize];
                    let color_image =
                        egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                    Preview::Ready(ctx.load_texture(
                        upload.name.clone(),
                        color_image,
                        egui::TextureOptions::default(),
                    ))
                }
                None => Preview::Unavailable,
            });

        match preview {
            Preview::Ready(texture) => Some(texture.clone()),
            Preview::Unavailable => None,
        }
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading("Navigation");
        ui.add_space(8.0);

        ui.label("Upload Images");
        ui.label(
            egui::RichText::new(format!(
                "Drop files here ({})",
                self.config.accepted_extensions.join(", ")
            ))
            .small(),
        );
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.path_input);
            if ui.button("Add").clicked() && !self.path_input.trim().is_empty() {
                let path = self.path_input.trim().to_string();
                self.add_upload_from_path(Path::new(&path));
                self.path_input.clear();
            }
        });

        let mut removed = None;
        for upload in &self.state.uploads {
            ui.horizontal(|ui| {
                ui.label(upload.name.as_str());
                if ui.small_button("x").clicked() {
                    removed = Some(upload.name.clone());
                }
            });
        }
        if let Some(name) = removed {
            self.state.remove_upload(&name);
            self.previews.remove(&name);
        }

        ui.separator();
        ui.label("Select an option");
        ui.radio_value(&mut self.state.view, View::About, "About");
        ui.radio_value(&mut self.state.view, View::Predict, "Predict");
    }

    fn render_about(&self, ui: &mut egui::Ui) {
        ui.heading("About");
        ui.label(ABOUT_TEXT);
    }

    fn render_predict(&mut self, ui: &mut egui::Ui) {
        ui.heading("Cancer Prediction");
        ui.label("Upload an image to predict cancer risk.");

        match &self.state.notice {
            Some(Notice::Info(message)) => {
                ui.label(message.as_str());
            }
            Some(Notice::Error(message)) => {
                ui.colored_label(egui::Color32::RED, message.as_str());
            }
            None => {}
        }

        if self.state.uploads.is_empty() {
            ui.label(NO_UPLOADS_TEXT);
            return;
        }

        let ctx = ui.ctx().clone();
        let uploads = self.state.uploads.clone();
        let mut requested = None;

        egui::ScrollArea::vertical()
            .id_source("uploads")
            .show(ui, |ui| {
                for upload in &uploads {
                    match self.preview(&ctx, upload) {
                        Some(texture) => {
                            ui.add(
                                egui::Image::new(&texture).max_width(self.config.preview_width),
                            );
                        }
                        None => {
                            ui.label("Preview unavailable");
                        }
                    }
                    ui.label(egui::RichText::new(upload.name.as_str()).italics());

                    if ui.button(format!("Predict for {}", upload.name)).clicked() {
                        requested = Some(upload.name.clone());
                    }
                    ui.add_space(12.0);
                }
            });

        if let Some(name) = requested {
            self.state.predict(&mut self.session, &name);
        }
    }

    fn render_history(&self, ui: &mut egui::Ui) {
        ui.heading("Prediction History");
        for line in self.state.history_lines() {
            ui.label(line);
        }
    }
}

impl eframe::App for ShellGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.collect_dropped_files(ctx);

        egui::SidePanel::left("navigation").show(ctx, |ui| {
            self.render_sidebar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| match self.state.view {
                View::About => self.render_about(&mut columns[0]),
                View::Predict => {
                    self.render_predict(&mut columns[0]);
                    self.render_history(&mut columns[1]);
                }
            });
        });
    }
}

/// Opens the window and blocks until it is closed.
pub fn run(
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    session: Session,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    let app = ShellGui::new(config, logger, session);

    eframe::run_native(&title, options, Box::new(|_cc| Box::new(app)))
        .map_err(|e| e.to_string().into())
}
