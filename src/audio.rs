pub mod decoder;
pub mod source;

pub use decoder::{DecodedAudio, decode_bytes};
pub use source::AudioFile;
