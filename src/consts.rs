/// Tracks shorter than this many seconds are flagged as too short.
/// Strict less-than: exactly 10 s is fine.
pub const MIN_DURATION_SECS: f64 = 10.0;

/// Tracks longer than this many seconds are flagged as too long.
pub const MAX_DURATION_SECS: f64 = 600.0;

/// Sample rates below this (Hz) are flagged as low quality.
pub const MIN_SAMPLE_RATE: u32 = 22050;

/// Any sample whose magnitude reaches this value counts as clipping (inclusive).
pub const CLIPPING_THRESHOLD: f32 = 0.99;

/// Samples with magnitude strictly below this count as silence.
pub const SILENCE_THRESHOLD: f32 = 0.001;

/// Fraction of silent samples above which the track is flagged.
pub const MAX_SILENCE_RATIO: f64 = 0.10;

/// Peak-to-peak spread below which the track is flagged as flat.
/// Linear amplitude, not dB.
pub const MIN_DYNAMIC_RANGE: f32 = 0.20;

/// Media type prefix a selected file must carry to be analyzed.
pub const AUDIO_MEDIA_PREFIX: &str = "audio/";

/// Media type reported when the content cannot be identified.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";
