pub mod raw;
pub mod wav;

pub use raw::SampleFormat;

use chrono::{DateTime, Local};
use log::debug;
use rustfft::num_complex::Complex64;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;

/// A complete recording held in memory
#[derive(Debug, Clone)]
pub struct Recording {
    pub samples: Vec<Complex64>,
    pub sample_rate: f64,
    /// File modification time, when the filesystem reports one
    pub captured: Option<DateTime<Local>>,
}

impl Recording {
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }
}

/// Load a recording from disk.
///
/// `.wav` files are read as stereo IQ and carry their own sample rate;
/// anything else is decoded as headerless interleaved `format` words at
/// `sample_rate`.
pub fn load_recording(path: &Path, format: SampleFormat, sample_rate: f64) -> Result<Recording> {
    let file = File::open(path)?;
    let captured = file
        .metadata()
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Local>::from);
    let reader = BufReader::new(file);

    let (samples, sample_rate) = if is_wav(path) {
        debug!("Reading {} as stereo IQ WAV", path.display());
        let (samples, rate) = wav::read_iq_wav(reader)?;
        (samples, rate as f64)
    } else {
        debug!("Reading {} as raw {}", path.display(), format);
        (raw::read_raw(reader, format)?, sample_rate)
    };

    Ok(Recording {
        samples,
        sample_rate,
        captured,
    })
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
}
