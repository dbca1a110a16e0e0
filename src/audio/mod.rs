//! Audio playback capability and its rodio-backed implementation.

mod player;

pub use player::{AudioPlayer, PlaybackError};

/// Capability injected into the selection controller: start playback of the
/// resource named by `locator`, replacing whatever was playing before. The
/// controller only ever produces locator strings; resolving and decoding
/// them is the sink's business.
pub trait PlaybackSink {
    fn play(&mut self, locator: &str);
}
