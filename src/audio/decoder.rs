//! Audio decoding using symphonia.
//!
//! Produces planar f32 channels plus format metadata from an in-memory file.

use std::io::Cursor;

use log::{debug, warn};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::{AnalysisError, Result};

/// Decoded sample buffer: one `Vec<f32>` per channel, all the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedAudio {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl DecodedAudio {
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Result<Self> {
        if sample_rate == 0 {
            return Err(AnalysisError::DecodeFailure("sample rate is zero".into()));
        }
        let Some(first) = channels.first() else {
            return Err(AnalysisError::DecodeFailure("no channels".into()));
        };
        let frames = first.len();
        if channels.iter().any(|c| c.len() != frames) {
            return Err(AnalysisError::DecodeFailure(
                "channel lengths differ".into(),
            ));
        }

        Ok(Self {
            sample_rate,
            channels,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn frame_count(&self) -> usize {
        self.channels[0].len()
    }

    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    pub fn channel(&self, idx: usize) -> Option<&[f32]> {
        self.channels.get(idx).map(Vec::as_slice)
    }

    pub fn first_channel(&self) -> &[f32] {
        &self.channels[0]
    }

    /// Every sample of every channel, channel by channel.
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.channels.iter().flat_map(|c| c.iter().copied())
    }
}

/// Decode a complete file held in memory.
///
/// `extension_hint` helps the probe pick a format reader; content sniffing
/// still runs when it is absent or wrong.
pub fn decode_bytes(bytes: &[u8], extension_hint: Option<&str>) -> Result<DecodedAudio> {
    let cursor = Cursor::new(bytes.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = extension_hint {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AnalysisError::DecodeFailure(format!("failed to probe format: {e}")))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| AnalysisError::DecodeFailure("no audio track found".into()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| AnalysisError::DecodeFailure(format!("failed to create decoder: {e}")))?;

    let mut sample_rate = codec_params.sample_rate;
    let mut channel_count = codec_params.channels.map(|c| c.count());
    let mut channels: Vec<Vec<f32>> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                debug!("Reached end of stream");
                break;
            }
            Err(SymphoniaError::ResetRequired) => {
                warn!("Stream reset required, stopping decode");
                break;
            }
            Err(e) => {
                warn!("Error reading packet: {e}");
                break;
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(e)) => {
                warn!("Skipping corrupt packet: {e}");
                continue;
            }
            Err(e) => {
                return Err(AnalysisError::DecodeFailure(format!("decode error: {e}")));
            }
        };

        let spec = *decoded.spec();
        let count = spec.channels.count();
        sample_rate = sample_rate.or(Some(spec.rate));
        channel_count = channel_count.or(Some(count));
        if channels.is_empty() {
            channels = vec![Vec::new(); count];
        }

        let buf = sample_buf
            .get_or_insert_with(|| SampleBuffer::new(decoded.capacity() as u64, spec));
        if (buf.capacity() as u64) < decoded.capacity() as u64 * count as u64 {
            *buf = SampleBuffer::new(decoded.capacity() as u64, spec);
        }
        buf.copy_interleaved_ref(decoded);

        for frame in buf.samples().chunks(count) {
            for (channel, &sample) in channels.iter_mut().zip(frame) {
                channel.push(sample);
            }
        }
    }

    let sample_rate = sample_rate
        .ok_or_else(|| AnalysisError::DecodeFailure("sample rate not found".into()))?;
    if channels.is_empty() {
        let count = channel_count
            .ok_or_else(|| AnalysisError::DecodeFailure("channel count not found".into()))?;
        channels = vec![Vec::new(); count];
    }

    debug!(
        "Decoded {} frames x {} channels at {} Hz",
        channels.first().map_or(0, Vec::len),
        channels.len(),
        sample_rate
    );

    DecodedAudio::new(sample_rate, channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_channel_lengths() {
        let result = DecodedAudio::new(44100, vec![vec![0.0; 4], vec![0.0; 3]]);
        assert!(matches!(result, Err(AnalysisError::DecodeFailure(_))));
    }

    #[test]
    fn rejects_missing_channels_and_zero_rate() {
        assert!(DecodedAudio::new(44100, Vec::new()).is_err());
        assert!(DecodedAudio::new(0, vec![vec![0.0]]).is_err());
    }

    #[test]
    fn duration_follows_frames_and_rate() {
        let audio = DecodedAudio::new(8000, vec![vec![0.0; 4000], vec![0.0; 4000]]).unwrap();
        assert_eq!(audio.frame_count(), 4000);
        assert_eq!(audio.channel_count(), 2);
        assert!((audio.duration_seconds() - 0.5).abs() < 1e-9);
        assert_eq!(audio.samples().count(), 8000);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let result = decode_bytes(b"definitely not an audio stream", Some("wav"));
        assert!(matches!(result, Err(AnalysisError::DecodeFailure(_))));
    }
}
