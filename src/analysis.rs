pub mod features;
pub mod feedback;
pub mod spectrum;
pub mod waveform;

pub use features::{FeatureSet, extract_features};
pub use feedback::{Advisory, classify};
pub use spectrum::SpectralSummary;
pub use waveform::{Peak, reduce_waveform};

use log::{debug, info};

use crate::audio::{AudioFile, DecodedAudio, decode_bytes};
use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, InvalidInput, Result};

/// File and format metadata shown at the top of the report.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioDetails {
    pub name: String,
    pub media_type: String,
    pub size: u64,
    pub duration_seconds: f64,
    pub sample_rate: u32,
    pub channel_count: usize,
    pub frame_count: usize,
}

impl AudioDetails {
    fn new(file: &AudioFile, audio: &DecodedAudio) -> Self {
        Self {
            name: file.name.clone(),
            media_type: file.media_type.clone(),
            size: file.size,
            duration_seconds: audio.duration_seconds(),
            sample_rate: audio.sample_rate(),
            channel_count: audio.channel_count(),
            frame_count: audio.frame_count(),
        }
    }

    pub fn size_kb(&self) -> f64 {
        self.size as f64 / 1024.0
    }
}

/// Everything produced for one analyzed file.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    pub details: AudioDetails,
    pub features: FeatureSet,
    pub feedback: Vec<Advisory>,
    pub waveform: Vec<Peak>,
    pub spectrum: SpectralSummary,
}

/// Validate, decode and analyze one file.
pub fn analyze_file(file: &AudioFile, config: &AnalyzerConfig) -> Result<AnalysisReport> {
    if !file.is_audio() {
        debug!("Rejecting {} with media type {}", file.name, file.media_type);
        return Err(AnalysisError::InvalidInputKind(InvalidInput::NotAudio));
    }

    let audio = decode_bytes(&file.bytes, file.extension().as_deref())?;
    let report = analyze_decoded(file, &audio, config)?;

    info!(
        "Analyzed {}: {:.2}s, {} Hz, {} ch, {} advisories",
        report.details.name,
        report.details.duration_seconds,
        report.details.sample_rate,
        report.details.channel_count,
        report.feedback.iter().filter(|a| a.is_issue()).count()
    );
    Ok(report)
}

/// Analysis stages after decoding. Features and waveform are independent.
pub fn analyze_decoded(
    file: &AudioFile,
    audio: &DecodedAudio,
    config: &AnalyzerConfig,
) -> Result<AnalysisReport> {
    let features = extract_features(audio)?;
    debug!("Features: {features:?}");

    let feedback = classify(&features);
    let waveform = reduce_waveform(audio.first_channel(), config.waveform_width);
    let spectrum = spectrum::summarize(audio, config);

    Ok(AnalysisReport {
        details: AudioDetails::new(file, audio),
        features,
        feedback,
        waveform,
        spectrum,
    })
}
