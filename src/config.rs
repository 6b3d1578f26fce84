pub const APP_VERSION: &str = "v0.1.0";

#[derive(Clone, PartialEq, Debug)]
pub struct AnalyzerConfig {
    /// Number of (min, max) buckets the waveform is reduced to.
    /// One bucket per horizontal pixel of the plot.
    pub waveform_width: usize,

    /// Window length for the spectral summary. Must be a power of 2 for FFT.
    /// 2048 samples at 44.1kHz = ~46ms of audio
    pub fft_size: usize,

    /// Maximum frequency (in Hz) considered as "bass".
    /// Typical ranges: Sub-bass (20-60Hz), Bass (60-250Hz)
    pub bass_freq_max: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            waveform_width: 400,
            fft_size: 2048,
            bass_freq_max: 250.0,
        }
    }
}
