use crate::audio::DecodedAudio;
use crate::consts;
use crate::error::{AnalysisError, InvalidInput, Result};

/// Summary statistics the feedback checks run against.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureSet {
    pub is_clipping: bool,
    /// Fraction of all samples (all channels) that are near zero, in [0, 1].
    pub silence_ratio: f64,
    /// Peak-to-peak spread: global max minus global min.
    pub dynamic_range: f32,
    pub sample_rate: u32,
    pub channel_count: usize,
    pub duration_seconds: f64,
}

pub fn extract_features(audio: &DecodedAudio) -> Result<FeatureSet> {
    if audio.frame_count() == 0 {
        return Err(AnalysisError::InvalidInputKind(InvalidInput::EmptyAudio));
    }

    let is_clipping = audio
        .samples()
        .any(|s| s.abs() >= consts::CLIPPING_THRESHOLD);

    let total = audio.frame_count() * audio.channel_count();
    let silent = audio
        .samples()
        .filter(|s| s.abs() < consts::SILENCE_THRESHOLD)
        .count();

    let (min, max) = audio
        .samples()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), s| {
            (min.min(s), max.max(s))
        });

    Ok(FeatureSet {
        is_clipping,
        silence_ratio: silence_ratio(silent, total),
        dynamic_range: max - min,
        sample_rate: audio.sample_rate(),
        channel_count: audio.channel_count(),
        duration_seconds: audio.duration_seconds(),
    })
}

fn silence_ratio(silent: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    silent as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audio(rate: u32, channels: Vec<Vec<f32>>) -> DecodedAudio {
        DecodedAudio::new(rate, channels).unwrap()
    }

    #[test]
    fn empty_buffer_is_rejected() {
        let result = extract_features(&audio(44100, vec![Vec::new(), Vec::new()]));
        assert!(matches!(
            result,
            Err(AnalysisError::InvalidInputKind(InvalidInput::EmptyAudio))
        ));
    }

    #[test]
    fn clipping_threshold_is_inclusive_on_both_polarities() {
        let positive = extract_features(&audio(8000, vec![vec![0.1, 0.99, 0.2]])).unwrap();
        assert!(positive.is_clipping);

        let negative = extract_features(&audio(8000, vec![vec![0.1, -0.99, 0.2]])).unwrap();
        assert!(negative.is_clipping);

        let below = extract_features(&audio(8000, vec![vec![0.1, 0.989, -0.989]])).unwrap();
        assert!(!below.is_clipping);
    }

    #[test]
    fn silence_counts_every_channel() {
        // 3 of 8 samples are below 0.001
        let features = extract_features(&audio(
            8000,
            vec![vec![0.0, 0.5, 0.0005, 0.5], vec![0.5, -0.0009, 0.5, 0.001]],
        ))
        .unwrap();
        assert!((features.silence_ratio - 3.0 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn dynamic_range_spans_channels() {
        let features =
            extract_features(&audio(8000, vec![vec![0.25, 0.1], vec![-0.5, 0.0]])).unwrap();
        assert!((features.dynamic_range - 0.75).abs() < 1e-6);
    }

    #[test]
    fn pass_through_fields() {
        let features = extract_features(&audio(22050, vec![vec![0.3; 44100]])).unwrap();
        assert_eq!(features.sample_rate, 22050);
        assert_eq!(features.channel_count, 1);
        assert!((features.duration_seconds - 2.0).abs() < 1e-9);
    }

    #[test]
    fn extraction_is_idempotent() {
        let input = audio(16000, vec![vec![0.2, -0.4, 0.0, 0.995], vec![0.1; 4]]);
        assert_eq!(
            extract_features(&input).unwrap(),
            extract_features(&input).unwrap()
        );
    }
}
