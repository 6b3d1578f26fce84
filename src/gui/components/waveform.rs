use eframe::egui;

use crate::analysis::Peak;

pub fn render_waveform(ui: &mut egui::Ui, peaks: &[Peak]) {
    ui.group(|ui| {
        ui.label(egui::RichText::new("Waveform").strong());

        let desired_height = 80.0;
        let (response, painter) = ui.allocate_painter(
            egui::vec2(ui.available_width(), desired_height),
            egui::Sense::hover(),
        );

        let rect = response.rect;

        painter.rect_filled(rect, 4.0, egui::Color32::from_gray(20));

        let center_y = rect.center().y;
        painter.line_segment(
            [
                egui::pos2(rect.left(), center_y),
                egui::pos2(rect.right(), center_y),
            ],
            egui::Stroke::new(0.5, egui::Color32::from_gray(80)),
        );

        if peaks.is_empty() {
            return;
        }

        let stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0, 112, 243));
        let column_width = rect.width() / peaks.len() as f32;
        let half_height = rect.height() / 2.0;

        for (i, peak) in peaks.iter().enumerate() {
            // Inverted pairs mark buckets past the end of the signal
            if !peak.has_data() {
                continue;
            }

            let x = rect.left() + (i as f32 + 0.5) * column_width;
            // Map sample from [-1, 1] to screen coordinates
            let y_top = center_y - peak.max.clamp(-1.0, 1.0) * half_height;
            let y_bottom = center_y - peak.min.clamp(-1.0, 1.0) * half_height;
            painter.line_segment([egui::pos2(x, y_top), egui::pos2(x, y_bottom)], stroke);
        }
    });
}
