use crate::prediction::category::Rgb;
use crate::prediction::display_model::DisplayModel;
use crate::upload::{UploadError, UploadedImage};
use crate::waste_app::core::{Event, Session, State};
use eframe::egui::{self, Color32, RichText};
use std::path::Path;

const ERROR_COLOR: Color32 = Color32::from_rgb(210, 40, 40);
const ADVISORY_COLOR: Color32 = Color32::from_rgb(200, 140, 0);

struct PreviewTexture {
    image: UploadedImage,
    texture: egui::TextureHandle,
}

/// Draws the current state and collects what the user asked for this frame.
pub struct Render {
    path_input: String,
    preview: Option<PreviewTexture>,
}

impl Render {
    pub fn new() -> Self {
        Self {
            path_input: String::new(),
            preview: None,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, state: &State) -> Vec<Event> {
        let mut events = Vec::new();
        let busy = matches!(state, State::Classifying { .. });

        if !busy {
            events.extend(take_dropped_file(ctx));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Time to classify your trash!");
                ui.label("Upload a photo of a piece of waste and find out which bin it belongs in.");
                ui.separator();

                self.upload_area(ui, busy, &mut events);
                ui.separator();

                match state {
                    State::Empty => {}
                    State::UploadRejected { error } => {
                        ui.colored_label(ERROR_COLOR, error.to_string());
                    }
                    _ => {
                        if let Some(session) = state.session() {
                            self.session(ui, session, state, &mut events);
                        }
                    }
                }
            });
        });

        events
    }

    fn upload_area(&mut self, ui: &mut egui::Ui, busy: bool, events: &mut Vec<Event>) {
        ui.label(RichText::new("Give me some trash!").size(18.0));
        ui.label("Drop a JPEG or PNG onto this window, or enter its path:");

        ui.add_enabled_ui(!busy, |ui| {
            ui.horizontal(|ui| {
                let response = ui.text_edit_singleline(&mut self.path_input);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if ui.button("Load").clicked() || submitted {
                    let path = self.path_input.trim();
                    if !path.is_empty() {
                        events.push(upload_event(UploadedImage::from_path(Path::new(path))));
                    }
                }
            });
        });
    }

    fn session(
        &mut self,
        ui: &mut egui::Ui,
        session: &Session,
        state: &State,
        events: &mut Vec<Event>,
    ) {
        let texture = self.preview_texture(ui.ctx(), session);

        ui.columns(2, |columns| {
            columns[0].add(
                egui::Image::from_texture(egui::load::SizedTexture::from_handle(&texture))
                    .max_width(320.0),
            );
            columns[0].label(RichText::new("Your lovely piece of waste").italics());

            let ui = &mut columns[1];
            let busy = matches!(state, State::Classifying { .. });
            if ui
                .add_enabled(!busy, egui::Button::new("Classify Trash"))
                .clicked()
            {
                events.push(Event::ClassifyClicked);
            }
            ui.add_space(8.0);

            match state {
                State::Classifying { .. } => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Wait for it...");
                    });
                }
                State::Classified { display, .. } => display_model(ui, display),
                State::Failed { error, .. } => {
                    ui.colored_label(ERROR_COLOR, error.to_string());
                }
                _ => {}
            }
        });
    }

    fn preview_texture(&mut self, ctx: &egui::Context, session: &Session) -> egui::TextureHandle {
        match &self.preview {
            Some(preview) if preview.image == session.image => preview.texture.clone(),
            _ => {
                let preview = session.image.preview();
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [preview.width as usize, preview.height as usize],
                    &preview.rgba,
                );
                let texture =
                    ctx.load_texture("upload-preview", color_image, egui::TextureOptions::LINEAR);
                self.preview = Some(PreviewTexture {
                    image: session.image.clone(),
                    texture: texture.clone(),
                });
                texture
            }
        }
    }
}

fn display_model(ui: &mut egui::Ui, display: &DisplayModel) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Type of Waste:").size(20.0));
        ui.label(RichText::new(display.primary.category.as_str()).size(20.0).strong());
    });
    ui.horizontal(|ui| {
        ui.label(RichText::new("Bin:").size(20.0));
        swatch(ui, display.primary.color);
        ui.label(display.primary.bin_label.as_str());
    });

    ui.add_space(8.0);
    ui.strong("Confidence");
    for bar in &display.bars {
        ui.add(
            egui::ProgressBar::new(bar.fill)
                .fill(to_color32(bar.color))
                .text(format!("{}: {}%", bar.category, bar.percent)),
        );
    }
    if display.low_confidence {
        ui.colored_label(
            ADVISORY_COLOR,
            "Low confidence: several categories are about equally likely.",
        );
    }

    ui.add_space(8.0);
    ui.strong("Predictions:");
    egui::Grid::new("predictions")
        .striped(true)
        .num_columns(2)
        .show(ui, |ui| {
            ui.strong("Category");
            ui.strong("Probability");
            ui.end_row();
            for row in &display.breakdown {
                ui.label(row.category.as_str());
                ui.label(format!("{}%", row.percent));
                ui.end_row();
            }
        });
}

fn swatch(ui: &mut egui::Ui, color: Rgb) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(60.0, 25.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 5.0, to_color32(color));
    ui.painter()
        .rect_stroke(rect, 5.0, egui::Stroke::new(1.0, Color32::GRAY));
}

fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.0, color.1, color.2)
}

fn upload_event(result: Result<UploadedImage, UploadError>) -> Event {
    match result {
        Ok(image) => Event::ImageUploaded(image),
        Err(error) => Event::UploadFailed(error),
    }
}

/// Only the first file counts when several are dropped at once.
fn take_dropped_file(ctx: &egui::Context) -> Option<Event> {
    let dropped = ctx.input(|i| i.raw.dropped_files.first().cloned())?;

    let result = match (dropped.bytes, dropped.path) {
        (Some(bytes), _) => UploadedImage::from_bytes(dropped.name, bytes.to_vec()),
        (None, Some(path)) => UploadedImage::from_path(&path),
        (None, None) => return None,
    };

    Some(upload_event(result))
}
