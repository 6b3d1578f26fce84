use eframe::egui;

use crate::analysis::{AudioDetails, SpectralSummary};

pub fn render_details_report(
    ui: &mut egui::Ui,
    details: &AudioDetails,
    spectrum: &SpectralSummary,
) {
    ui.label(egui::RichText::new("Audio Details Report").size(16.0));
    ui.add_space(8.0);

    render_file_details(ui, details);
    ui.add_space(8.0);

    render_levels(ui, spectrum);
    ui.add_space(12.0);
}

fn render_file_details(ui: &mut egui::Ui, details: &AudioDetails) {
    ui.group(|ui| {
        egui::Grid::new("details_grid")
            .num_columns(2)
            .spacing([20.0, 4.0])
            .show(ui, |ui| {
                row(ui, "File Name:", details.name.clone());
                row(ui, "Type:", details.media_type.clone());
                row(ui, "Size:", format!("{:.2} KB", details.size_kb()));
                row(
                    ui,
                    "Duration:",
                    format!("{:.2} seconds", details.duration_seconds),
                );
                row(ui, "Sample Rate:", format!("{} Hz", details.sample_rate));
                row(ui, "Channels:", details.channel_count.to_string());
                row(ui, "Length (samples):", details.frame_count.to_string());
            });
    });
}

fn render_levels(ui: &mut egui::Ui, spectrum: &SpectralSummary) {
    ui.group(|ui| {
        ui.colored_label(egui::Color32::LIGHT_BLUE, "Levels:");
        ui.horizontal(|ui| {
            ui.label("Loudness (RMS):");
            ui.strong(format!("{:.1}%", spectrum.rms_loudness * 100.0));

            ui.separator();

            ui.label("Peak:");
            ui.strong(format!("{:.1}%", spectrum.peak_amplitude * 100.0));

            ui.separator();

            ui.label("Bass Energy:");
            ui.strong(format!("{:.1}%", spectrum.bass_energy_ratio * 100.0));
        });
    });
}

fn row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.strong(label);
    ui.label(value);
    ui.end_row();
}
