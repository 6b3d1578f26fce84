use eframe::egui;

use crate::config::AnalyzerConfig;

const FFT_SIZES: [usize; 5] = [512, 1024, 2048, 4096, 8192];

pub fn render_config_panel(ui: &mut egui::Ui, config: &mut AnalyzerConfig) {
    ui.label(egui::RichText::new("Configuration").size(16.0));
    ui.add_space(8.0);

    egui::CollapsingHeader::new("Waveform")
        .default_open(false)
        .show(ui, |ui| {
            ui.add_space(4.0);
            egui::Grid::new("waveform_settings_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Resolution:")
                        .on_hover_text("Number of min/max columns in the plot");
                    ui.add(
                        egui::Slider::new(&mut config.waveform_width, 50..=1600)
                            .suffix(" columns"),
                    );
                    ui.end_row();
                });
        });

    ui.add_space(8.0);

    egui::CollapsingHeader::new("Bass Detection")
        .default_open(false)
        .show(ui, |ui| {
            ui.add_space(4.0);
            egui::Grid::new("bass_settings_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Max Bass Freq:")
                        .on_hover_text("What counts as 'bass' - lower = only deep bass");
                    ui.add(
                        egui::Slider::new(&mut config.bass_freq_max, 20.0..=500.0).suffix(" Hz"),
                    );
                    ui.end_row();

                    ui.label("FFT Size:")
                        .on_hover_text("Larger = finer frequency resolution");
                    egui::ComboBox::from_id_salt("fft_size_selector")
                        .selected_text(config.fft_size.to_string())
                        .show_ui(ui, |ui| {
                            for size in FFT_SIZES {
                                ui.selectable_value(&mut config.fft_size, size, size.to_string());
                            }
                        });
                    ui.end_row();
                });
        });

    ui.add_space(20.0);
}
