use eframe::egui;

use crate::analysis::Advisory;

pub fn render_feedback_list(ui: &mut egui::Ui, feedback: &[Advisory]) {
    ui.label(egui::RichText::new("Feedback & Suggestions").size(16.0));
    ui.add_space(4.0);

    ui.group(|ui| {
        for advisory in feedback {
            let color = if advisory.is_issue() {
                egui::Color32::from_rgb(255, 190, 90)
            } else {
                egui::Color32::LIGHT_GREEN
            };
            ui.horizontal_wrapped(|ui| {
                ui.colored_label(color, "•");
                ui.label(advisory.message());
            });
        }
    });
    ui.add_space(12.0);
}
