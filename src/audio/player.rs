use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use thiserror::Error;

use super::PlaybackSink;

/// Errors raised while opening the output device or starting playback.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("Failed to open audio output: {0}")]
    Output(#[from] rodio::StreamError),
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
}

/// Plays at most one resource at a time through the default output device.
///
/// Each play request builds a fresh sink; dropping the previous sink stops
/// its stream, so a new request implicitly supersedes the old one.
pub struct AudioPlayer {
    stream: OutputStream,
    sink: Option<Sink>,
    audio_root: PathBuf,
    volume: f32,
}

impl AudioPlayer {
    /// Open the default output stream. Locators are resolved against
    /// `audio_root`.
    pub fn new(audio_root: PathBuf) -> Result<Self, PlaybackError> {
        let stream = OutputStreamBuilder::open_default_stream()?;
        Ok(Self {
            stream,
            sink: None,
            audio_root,
            volume: 1.0,
        })
    }

    /// Adjust output volume for current and future playback.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(self.volume);
        }
    }

    /// Stop any active playback.
    pub fn stop(&mut self) {
        self.sink = None;
    }

    fn start(&mut self, locator: &str) -> Result<(), PlaybackError> {
        let path = self.audio_root.join(locator);
        let file = File::open(&path).map_err(|source| PlaybackError::Open {
            path: path.clone(),
            source,
        })?;
        let source =
            Decoder::new(BufReader::new(file)).map_err(|source| PlaybackError::Decode {
                path,
                source,
            })?;
        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);
        sink.append(source);
        self.sink = Some(sink);
        Ok(())
    }
}

impl PlaybackSink for AudioPlayer {
    fn play(&mut self, locator: &str) {
        if let Err(err) = self.start(locator) {
            tracing::warn!("Playback failed for {locator}: {err}");
        }
    }
}
