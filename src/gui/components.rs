mod config_panel;
mod details_report;
mod feedback_list;
mod waveform;

pub use config_panel::render_config_panel;
pub use details_report::render_details_report;
pub use feedback_list::render_feedback_list;
pub use waveform::render_waveform;
