use thiserror::Error;

/// Errors raised while loading a recording or rendering its spectrum.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read recording: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode WAV recording: {0}")]
    Wav(#[from] hound::Error),

    #[error("cannot pair {words} sample words into I/Q (count must be even)")]
    OddSampleCount { words: usize },

    #[error("expected stereo WAV (I/Q), got {0} channel(s)")]
    ChannelCount(u16),

    #[error("recording contains no samples")]
    Empty,

    #[cfg(feature = "gui")]
    #[error("plot window failed: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, Error>;
