use super::features::FeatureSet;
use crate::consts;

/// One advisory, keyed by the check that produced it.
///
/// Variant order is evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advisory {
    TooShort,
    TooLong,
    Mono,
    LowSampleRate,
    Clipping,
    HighSilence,
    LowDynamicRange,
    NoIssues,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::TooShort => {
                "Track is very short. Consider making it longer for a fuller experience."
            }
            Advisory::TooLong => {
                "Track is very long. Consider splitting into sections or shortening."
            }
            Advisory::Mono => "Track is mono. Consider using stereo for a richer sound.",
            Advisory::LowSampleRate => {
                "Sample rate is low. Consider exporting at 44100 Hz or higher for better quality."
            }
            Advisory::Clipping => {
                "Track is clipping. Lower the output volume or use a limiter to avoid distortion."
            }
            Advisory::HighSilence => {
                "Track contains a lot of silence. Consider trimming or editing out silent sections."
            }
            Advisory::LowDynamicRange => {
                "Track has low dynamic range. Consider adding more variation in volume for a more engaging sound."
            }
            Advisory::NoIssues => "No major issues detected. Your track looks good!",
        }
    }

    pub fn is_issue(self) -> bool {
        self != Advisory::NoIssues
    }
}

pub fn classify(features: &FeatureSet) -> Vec<Advisory> {
    let checks = [
        (
            features.duration_seconds < consts::MIN_DURATION_SECS,
            Advisory::TooShort,
        ),
        (
            features.duration_seconds > consts::MAX_DURATION_SECS,
            Advisory::TooLong,
        ),
        (features.channel_count == 1, Advisory::Mono),
        (
            features.sample_rate < consts::MIN_SAMPLE_RATE,
            Advisory::LowSampleRate,
        ),
        (features.is_clipping, Advisory::Clipping),
        (
            features.silence_ratio > consts::MAX_SILENCE_RATIO,
            Advisory::HighSilence,
        ),
        (
            features.dynamic_range < consts::MIN_DYNAMIC_RANGE,
            Advisory::LowDynamicRange,
        ),
    ];

    let advisories: Vec<Advisory> = checks
        .into_iter()
        .filter_map(|(fired, advisory)| fired.then_some(advisory))
        .collect();

    if advisories.is_empty() {
        vec![Advisory::NoIssues]
    } else {
        advisories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> FeatureSet {
        FeatureSet {
            is_clipping: false,
            silence_ratio: 0.0,
            dynamic_range: 1.0,
            sample_rate: 48000,
            channel_count: 2,
            duration_seconds: 30.0,
        }
    }

    #[test]
    fn healthy_track_gets_single_positive_message() {
        assert_eq!(classify(&healthy()), vec![Advisory::NoIssues]);
    }

    #[test]
    fn duration_bounds_are_strict() {
        let at_min = FeatureSet {
            duration_seconds: 10.0,
            ..healthy()
        };
        assert_eq!(classify(&at_min), vec![Advisory::NoIssues]);

        let at_max = FeatureSet {
            duration_seconds: 600.0,
            ..healthy()
        };
        assert_eq!(classify(&at_max), vec![Advisory::NoIssues]);

        let short = FeatureSet {
            duration_seconds: 9.99,
            ..healthy()
        };
        assert!(classify(&short).contains(&Advisory::TooShort));

        let long = FeatureSet {
            duration_seconds: 600.01,
            ..healthy()
        };
        assert!(classify(&long).contains(&Advisory::TooLong));
    }

    #[test]
    fn second_channel_removes_mono_advisory() {
        let mono = FeatureSet {
            channel_count: 1,
            ..healthy()
        };
        assert_eq!(classify(&mono), vec![Advisory::Mono]);
        assert!(!classify(&healthy()).contains(&Advisory::Mono));
    }

    #[test]
    fn sample_rate_and_silence_thresholds() {
        let at_rate = FeatureSet {
            sample_rate: 22050,
            ..healthy()
        };
        assert!(!classify(&at_rate).contains(&Advisory::LowSampleRate));

        let at_ratio = FeatureSet {
            silence_ratio: 0.10,
            ..healthy()
        };
        assert!(!classify(&at_ratio).contains(&Advisory::HighSilence));

        let above_ratio = FeatureSet {
            silence_ratio: 0.11,
            ..healthy()
        };
        assert_eq!(classify(&above_ratio), vec![Advisory::HighSilence]);
    }

    #[test]
    fn all_checks_fire_in_table_order() {
        let worst = FeatureSet {
            is_clipping: true,
            silence_ratio: 0.9,
            dynamic_range: 0.05,
            sample_rate: 8000,
            channel_count: 1,
            duration_seconds: 2.0,
        };
        assert_eq!(
            classify(&worst),
            vec![
                Advisory::TooShort,
                Advisory::Mono,
                Advisory::LowSampleRate,
                Advisory::Clipping,
                Advisory::HighSilence,
                Advisory::LowDynamicRange,
            ]
        );
        assert!(classify(&worst).iter().all(|a| a.is_issue()));
    }
}
