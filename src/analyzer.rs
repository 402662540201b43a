use log::{debug, info};
use std::path::Path;

use crate::error::{Error, Result};
use crate::input::{load_recording, Recording, SampleFormat};
use crate::spectrum::{Peak, Spectrum};

/// Everything derived from one recording
#[derive(Debug, Clone)]
pub struct Analysis {
    pub recording: Recording,
    pub spectrum: Spectrum,
    pub strongest: Peak,
}

/// Load a recording from disk and compute its spectrum
pub fn analyze_file(path: &Path, format: SampleFormat, sample_rate: f64) -> Result<Analysis> {
    info!("Reading {}", path.display());
    let recording = load_recording(path, format, sample_rate)?;
    analyze(recording)
}

pub fn analyze(recording: Recording) -> Result<Analysis> {
    debug!(
        "Loaded {} samples at {} Hz ({:.6}s)",
        recording.samples.len(),
        recording.sample_rate,
        recording.duration_secs()
    );

    let spectrum = Spectrum::compute(&recording.samples, recording.sample_rate)?;
    let strongest = spectrum.strongest().ok_or(Error::Empty)?;
    debug!(
        "Strongest bin {} at {:.1} Hz ({:.1} dB)",
        strongest.index, strongest.frequency_hz, strongest.level_db
    );

    Ok(Analysis {
        recording,
        spectrum,
        strongest,
    })
}
