use crate::audio::AudioFile;
use crate::config::{APP_VERSION, AnalyzerConfig};
use crate::controller::{AnalysisController, AnalysisState};
use eframe::egui;
use log::{debug, error, info};
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::components::{
    render_config_panel, render_details_report, render_feedback_list, render_waveform,
};

const AUDIO_EXTENSIONS: [&str; 8] = ["wav", "mp3", "flac", "ogg", "oga", "m4a", "mp4", "aac"];

pub struct AppState {
    active_config: Arc<Mutex<AnalyzerConfig>>,
    pending_config: AnalyzerConfig, // Local copy for sliders
    controller: AnalysisController,
    /// Set when a worker thread could not be started.
    load_error: Option<String>,
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        self.render_top_panel(ctx);
        self.render_bottom_panel(ctx);
        self.render_central_panel(ctx);

        if matches!(self.controller.state(), AnalysisState::Pending { .. }) {
            ctx.request_repaint();
        }
    }
}

impl AppState {
    pub fn new(config: Arc<Mutex<AnalyzerConfig>>, controller: AnalysisController) -> Self {
        debug!("Initializing GUI state...");

        let pending_config = config.lock().unwrap().clone();
        debug!(
            "Initial config loaded: waveform_width={}, fft_size={}, bass_freq_max={}Hz",
            pending_config.waveform_width, pending_config.fft_size, pending_config.bass_freq_max
        );

        Self {
            active_config: config,
            pending_config,
            controller,
            load_error: None,
        }
    }

    fn open_path(&mut self, path: &Path) {
        info!("Opening {}", path.display());
        match AudioFile::from_path(path) {
            Ok(file) => self.submit(file),
            Err(e) => {
                error!("Failed to read {}: {e}", path.display());
                // Publish through the controller so the previous report is cleared
                let ticket = self.controller.begin(&path.display().to_string());
                self.controller.commit(ticket, Err(e));
            }
        }
    }

    fn submit(&mut self, file: AudioFile) {
        self.load_error = None;
        if let Err(e) = self.controller.submit(file) {
            error!("Failed to start analysis: {e:#}");
            self.load_error = Some("Failed to analyze audio file.".to_string());
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        // Only the most recent drop matters
        let Some(file) = dropped.into_iter().last() else {
            return;
        };

        if let Some(bytes) = file.bytes {
            let declared = (!file.mime.is_empty()).then_some(file.mime.as_str());
            self.submit(AudioFile::from_bytes(
                file.name.clone(),
                bytes.to_vec(),
                declared,
            ));
        } else if let Some(path) = file.path {
            self.open_path(&path);
        }
    }

    fn pick_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Audio", &AUDIO_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file();

        if let Some(path) = picked {
            self.open_path(&path);
        }
    }

    fn apply_settings(&mut self) {
        debug!("Applying settings - Config: {:?}", self.pending_config);

        {
            let mut config = self.active_config.lock().unwrap();
            *config = self.pending_config.clone();
        }

        match self.controller.reanalyze() {
            Ok(Some(_)) => debug!("Re-analyzing with new settings..."),
            Ok(None) => {}
            Err(e) => {
                error!("Failed to start analysis: {e:#}");
                self.load_error = Some("Failed to analyze audio file.".to_string());
            }
        }
        info!("Settings applied successfully");
    }

    fn reset_to_default(&mut self) {
        debug!("Resetting config to defaults");
        self.pending_config = AnalyzerConfig::default();
    }

    fn disable_apply_button(&self) -> bool {
        self.pending_config == *self.active_config.lock().unwrap()
    }

    fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(format!("Trackscope {APP_VERSION}"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match self.controller.state() {
                        AnalysisState::Idle => {
                            ui.colored_label(egui::Color32::GRAY, "No file");
                        }
                        AnalysisState::Pending { name } => {
                            ui.spinner();
                            ui.colored_label(egui::Color32::YELLOW, format!("Analyzing {name}"));
                        }
                        AnalysisState::Ready(_) => {
                            ui.colored_label(egui::Color32::GREEN, "Analyzed");
                        }
                        AnalysisState::Failed(_) => {
                            ui.colored_label(egui::Color32::RED, "Failed");
                        }
                    }
                });
            });
            ui.add_space(4.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.button("Open audio file…").clicked() {
                    self.pick_file();
                }
                ui.label("or drop a file onto this window");
            });
            ui.add_space(4.0);
        });
    }

    fn render_bottom_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add_space(4.0);
                let apply_enabled = !self.disable_apply_button();

                if apply_enabled {
                    if ui.button("Apply Settings").clicked() {
                        self.apply_settings();
                    }
                } else {
                    ui.add_enabled(false, egui::Button::new("Apply Settings"));
                }

                if ui.button("↺ Reset to Default").clicked() {
                    self.reset_to_default();
                }
            });
            ui.add_space(8.0);
        });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(8.0);

                    if let Some(message) = &self.load_error {
                        ui.colored_label(egui::Color32::RED, message);
                        ui.add_space(8.0);
                    }

                    match self.controller.state() {
                        AnalysisState::Ready(report) => {
                            render_details_report(ui, &report.details, &report.spectrum);
                            render_feedback_list(ui, &report.feedback);
                            render_waveform(ui, &report.waveform);
                            ui.add_space(20.0);
                        }
                        AnalysisState::Failed(message) => {
                            ui.colored_label(egui::Color32::RED, message);
                            ui.add_space(8.0);
                        }
                        AnalysisState::Idle | AnalysisState::Pending { .. } => {}
                    }

                    render_config_panel(ui, &mut self.pending_config);
                });
        });
    }
}
