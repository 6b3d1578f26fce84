//! Audio file inspector: decode a file, derive summary statistics, turn them
//! into advisory feedback and reduce the waveform for display.

pub mod analysis;
pub mod audio;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod gui;

pub use analysis::{AnalysisReport, analyze_file};
pub use error::{AnalysisError, InvalidInput};
