use std::fs;
use std::path::Path;

use log::debug;

use crate::consts;
use crate::error::Result;

/// A file picked by the user, fully read into memory.
#[derive(Clone, Debug)]
pub struct AudioFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl AudioFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::from_bytes(name, bytes, None))
    }

    /// Build from an in-memory payload (drag and drop). A non-empty declared
    /// type is trusted, otherwise the content is sniffed.
    pub fn from_bytes(name: String, bytes: Vec<u8>, declared_type: Option<&str>) -> Self {
        let media_type = match declared_type {
            Some(declared) if !declared.is_empty() => declared.to_string(),
            _ => sniff_media_type(&bytes),
        };
        debug!("{name}: {} bytes, media type {media_type}", bytes.len());

        Self {
            name,
            media_type,
            size: bytes.len() as u64,
            bytes,
        }
    }

    pub fn is_audio(&self) -> bool {
        self.media_type.starts_with(consts::AUDIO_MEDIA_PREFIX)
    }

    /// Lower-cased extension of the file name, used as a probe hint.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }
}

fn sniff_media_type(bytes: &[u8]) -> String {
    infer::get(bytes)
        .map(|kind| kind.mime_type().to_string())
        .unwrap_or_else(|| consts::UNKNOWN_MEDIA_TYPE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_type_wins_over_sniffing() {
        let file = AudioFile::from_bytes("a.bin".into(), b"not audio".to_vec(), Some("audio/wav"));
        assert_eq!(file.media_type, "audio/wav");
        assert!(file.is_audio());
        assert_eq!(file.size, 9);
    }

    #[test]
    fn unknown_content_is_not_audio() {
        let file = AudioFile::from_bytes("notes.txt".into(), b"hello world".to_vec(), Some(""));
        assert_eq!(file.media_type, consts::UNKNOWN_MEDIA_TYPE);
        assert!(!file.is_audio());
    }

    #[test]
    fn extension_is_lower_cased() {
        let file = AudioFile::from_bytes("Song.WAV".into(), Vec::new(), Some("audio/wav"));
        assert_eq!(file.extension().as_deref(), Some("wav"));
    }
}
