use rustfft::{FftPlanner, num_complex::Complex};

use crate::audio::DecodedAudio;
use crate::config::AnalyzerConfig;

/// Level and tonal balance figures shown next to the file details.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpectralSummary {
    /// RMS over every sample of every channel.
    pub rms_loudness: f32,
    pub peak_amplitude: f32,
    /// Share of spectral magnitude below the bass cutoff, 0-1.
    pub bass_energy_ratio: f32,
}

pub fn summarize(audio: &DecodedAudio, config: &AnalyzerConfig) -> SpectralSummary {
    SpectralSummary {
        rms_loudness: rms_loudness(audio),
        peak_amplitude: audio.samples().fold(0.0, |peak: f32, s| peak.max(s.abs())),
        bass_energy_ratio: bass_energy_ratio(
            audio.first_channel(),
            audio.sample_rate() as f32,
            config.fft_size,
            config.bass_freq_max,
        ),
    }
}

pub fn rms_loudness(audio: &DecodedAudio) -> f32 {
    let total = audio.frame_count() * audio.channel_count();
    if total == 0 {
        return 0.0;
    }

    let sum_squares: f64 = audio.samples().map(|s| (s as f64) * (s as f64)).sum();
    (sum_squares / total as f64).sqrt() as f32
}

/// Bass share of the magnitude spectrum, accumulated over consecutive
/// non-overlapping windows of `fft_size` samples. Partial trailing windows
/// are ignored.
pub fn bass_energy_ratio(
    samples: &[f32],
    sample_rate: f32,
    fft_size: usize,
    bass_freq_max: f32,
) -> f32 {
    if fft_size < 2 || samples.len() < fft_size || sample_rate <= 0.0 {
        return 0.0;
    }

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(fft_size);

    let nyquist_bin = fft_size / 2;
    let bin_freq = sample_rate / fft_size as f32;
    let bass_bin_max = ((bass_freq_max / bin_freq) as usize).clamp(1, nyquist_bin);

    let mut bass_energy = 0.0f64;
    let mut total_energy = 0.0f64;
    let mut complex_buffer: Vec<Complex<f32>> = Vec::with_capacity(fft_size);

    for window in samples.chunks_exact(fft_size) {
        complex_buffer.clear();
        complex_buffer.extend(window.iter().map(|&x| Complex::new(x, 0.0)));
        fft.process(&mut complex_buffer);

        // Skip the DC bin
        bass_energy += complex_buffer[1..bass_bin_max]
            .iter()
            .map(|c| c.norm() as f64)
            .sum::<f64>();
        total_energy += complex_buffer[1..nyquist_bin]
            .iter()
            .map(|c| c.norm() as f64)
            .sum::<f64>();
    }

    if total_energy > 0.0 {
        (bass_energy / total_energy) as f32
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn sine(freq: f32, rate: f32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * PI * freq * i as f32 / rate).sin() * 0.5)
            .collect()
    }

    #[test]
    fn low_tone_is_mostly_bass() {
        let samples = sine(86.13, 44100.0, 8192);
        let ratio = bass_energy_ratio(&samples, 44100.0, 2048, 250.0);
        assert!(ratio > 0.8, "ratio {ratio}");
    }

    #[test]
    fn high_tone_has_little_bass() {
        let samples = sine(5000.0, 44100.0, 8192);
        let ratio = bass_energy_ratio(&samples, 44100.0, 2048, 250.0);
        assert!(ratio < 0.2, "ratio {ratio}");
    }

    #[test]
    fn short_input_yields_zero() {
        assert_eq!(bass_energy_ratio(&[0.5; 100], 44100.0, 2048, 250.0), 0.0);
    }

    #[test]
    fn rms_of_constant_signal() {
        let audio = DecodedAudio::new(8000, vec![vec![0.5; 100], vec![-0.5; 100]]).unwrap();
        assert!((rms_loudness(&audio) - 0.5).abs() < 1e-6);

        let summary = summarize(&audio, &AnalyzerConfig::default());
        assert!((summary.peak_amplitude - 0.5).abs() < 1e-6);
        assert_eq!(summary.bass_energy_ratio, 0.0);
    }
}
