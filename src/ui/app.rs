use std::path::PathBuf;

use eframe::egui;
use log::warn;
use rfd::FileDialog;

use crate::formats::{is_supported_image_path, supported_formats};
use crate::model::{Algorithm, ChannelId};
use crate::runtime::{RenderParameters, RenderSession};

use super::frame::{fit_size, gray_to_color, rgb_to_color};
use super::sliders::{SliderKind, visible_sliders};

#[derive(Debug)]
struct StatusLine {
    text: String,
    error: Option<String>,
}

pub(super) struct ThresholdApp {
    session: RenderSession,
    pending_open: Option<PathBuf>,
    original: Option<egui::TextureHandle>,
    binary: Option<egui::TextureHandle>,
    needs_render: bool,
    status: StatusLine,
}

impl ThresholdApp {
    pub(super) fn new(startup_input: Option<PathBuf>, params: RenderParameters) -> Self {
        Self {
            session: RenderSession::with_parameters(params),
            pending_open: startup_input,
            original: None,
            binary: None,
            needs_render: false,
            status: StatusLine {
                text: "Select or drop an image".to_string(),
                error: None,
            },
        }
    }

    fn open(&mut self, ctx: &egui::Context, path: PathBuf) {
        if !is_supported_image_path(&path) {
            warn!("ignoring {}: unsupported file type", path.display());
            self.status.error = Some(format!("unsupported file type: {}", path.display()));
            return;
        }
        match self.session.load(&path) {
            Ok(()) => {
                if let Some(source) = self.session.store().source() {
                    let color = rgb_to_color(source.pixels());
                    upload(ctx, &mut self.original, "original", color);
                }
                self.status.error = None;
                self.needs_render = true;
            }
            Err(error) => {
                warn!("{error}");
                self.status.error = Some(error.to_string());
            }
        }
    }

    fn clear(&mut self) {
        self.session.clear();
        self.original = None;
        self.binary = None;
        self.needs_render = false;
        self.status = StatusLine {
            text: "Select or drop an image".to_string(),
            error: None,
        };
    }

    fn render(&mut self, ctx: &egui::Context) {
        self.needs_render = false;
        if !self.session.store().is_loaded() {
            return;
        }
        match self.session.render_report() {
            Ok(output) => {
                upload(ctx, &mut self.binary, "binary", gray_to_color(&output.image));
                let name = self
                    .session
                    .store()
                    .source()
                    .map(|source| source.file_name())
                    .unwrap_or_default();
                let (width, height) = output.image.dimensions();
                let mut text = format!(
                    "{name} ({width}x{height}) | {} | {}",
                    output.channel.label(),
                    output.algorithm.label()
                );
                if let Some(level) = output.otsu_level {
                    text.push_str(&format!(" | Otsu level: {level}"));
                }
                text.push_str(&format!(" | {:.1} ms", output.elapsed.as_secs_f64() * 1_000.0));
                self.status.text = text;
                self.status.error = None;
            }
            Err(error) => {
                warn!("{error}");
                self.status.error = Some(error.to_string());
            }
        }
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui, opened: &mut Option<PathBuf>) {
        ui.horizontal(|ui| {
            if ui.button("Select File").clicked() {
                let mut dialog = FileDialog::new()
                    .add_filter("Images", supported_formats())
                    .set_title("Select Image");
                if let Ok(cwd) = std::env::current_dir() {
                    dialog = dialog.set_directory(cwd);
                }
                *opened = dialog.pick_file();
            }
            if ui.button("Clear").clicked() {
                self.clear();
            }
            ui.separator();

            let mut channel = self.session.params().channel();
            egui::ComboBox::from_label("Channel")
                .selected_text(channel.label())
                .show_ui(ui, |ui| {
                    for option in ChannelId::ALL {
                        ui.selectable_value(&mut channel, option, option.label());
                    }
                });
            if channel != self.session.params().channel() {
                self.session.set_channel(channel);
                self.needs_render = true;
            }

            let mut algorithm = self.session.params().algorithm();
            egui::ComboBox::from_label("Algorithm")
                .selected_text(algorithm.label())
                .show_ui(ui, |ui| {
                    for option in Algorithm::ALL {
                        ui.selectable_value(&mut algorithm, option, option.label());
                    }
                });
            if algorithm != self.session.params().algorithm() {
                self.session.set_algorithm(algorithm);
                self.needs_render = true;
            }
        });
    }

    fn draw_sliders(&mut self, ui: &mut egui::Ui) {
        let params = self.session.params();
        let sliders = visible_sliders(params.algorithm(), params.blur_enabled());

        ui.horizontal(|ui| {
            let mut blur_enabled = self.session.params().blur_enabled();
            if ui.checkbox(&mut blur_enabled, "Blur").changed() {
                self.session.set_blur_enabled(blur_enabled);
                self.needs_render = true;
            }
        });

        for kind in sliders {
            let mut value = kind.current(self.session.params());
            ui.horizontal(|ui| {
                ui.label(kind.label(value));
                let response = ui.add(
                    egui::Slider::new(&mut value, kind.range())
                        .step_by(kind.step())
                        .show_value(false)
                        .clamping(egui::SliderClamping::Always),
                );
                if response.changed() {
                    match kind.apply(&mut self.session, value) {
                        Ok(()) => self.needs_render = true,
                        Err(error) => self.status.error = Some(error.to_string()),
                    }
                }
            });
        }
    }

    fn draw_images(&self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let cell = egui::vec2((available.x - ui.spacing().item_spacing.x) / 2.0, available.y);
        ui.columns(2, |columns| {
            draw_texture(&mut columns[0], self.original.as_ref(), cell, "No image loaded");
            draw_texture(&mut columns[1], self.binary.as_ref(), cell, "");
        });
    }
}

impl eframe::App for ThresholdApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut opened = self.pending_open.take();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(2.0);
            self.draw_controls(ui, &mut opened);
            ui.add_space(2.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status.text);
            if let Some(error) = &self.status.error {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }
        });

        egui::TopBottomPanel::bottom("sliders").show(ctx, |ui| {
            ui.add_space(2.0);
            self.draw_sliders(ui);
            ui.add_space(2.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_images(ui);
        });

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().find_map(|file| file.path) {
            opened = Some(path);
        }

        if let Some(path) = opened {
            self.open(ctx, path);
        }
        if self.needs_render {
            self.render(ctx);
            ctx.request_repaint();
        }
    }
}

fn upload(
    ctx: &egui::Context,
    slot: &mut Option<egui::TextureHandle>,
    name: &str,
    color: egui::ColorImage,
) {
    if let Some(texture) = slot {
        texture.set(color, egui::TextureOptions::NEAREST);
    } else {
        *slot = Some(ctx.load_texture(
            format!("threshold-viewer-{name}"),
            color,
            egui::TextureOptions::NEAREST,
        ));
    }
}

fn draw_texture(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    cell: egui::Vec2,
    placeholder: &str,
) {
    match texture {
        Some(texture) => {
            let size = fit_size(texture.size(), cell);
            ui.add(egui::Image::new((texture.id(), size)));
        }
        None => {
            ui.label(placeholder);
        }
    }
}
