use rustfft::{num_complex::Complex64, FftPlanner};

use crate::error::{Error, Result};

/// A centred spectrum: `bins[i]` is the DFT value at `frequencies[i]` Hz,
/// with zero frequency at index `len / 2`.
#[derive(Debug, Clone)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub bins: Vec<Complex64>,
}

/// The strongest bin of a spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub index: usize,
    pub frequency_hz: f64,
    pub level_db: f64,
}

impl Spectrum {
    /// Transform the whole sample sequence at once: no window, no framing,
    /// no normalization.
    pub fn compute(samples: &[Complex64], sample_rate: f64) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::Empty);
        }

        let n = samples.len();
        let mut buffer = samples.to_vec();
        let mut planner = FftPlanner::new();
        planner.plan_fft_forward(n).process(&mut buffer);

        Ok(Self {
            frequencies: fft_shift(&fft_freq(n, 1.0 / sample_rate)),
            bins: fft_shift(&buffer),
        })
    }

    pub fn magnitudes(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm()).collect()
    }

    pub fn magnitudes_db(&self) -> Vec<f64> {
        self.bins.iter().map(|c| magnitude_db(c.norm())).collect()
    }

    /// Find the bin with the largest magnitude (first one wins on ties)
    pub fn strongest(&self) -> Option<Peak> {
        let mut best: Option<(usize, f64)> = None;
        for (i, mag) in self.bins.iter().map(|c| c.norm()).enumerate() {
            if best.map_or(true, |(_, m)| mag > m) {
                best = Some((i, mag));
            }
        }

        best.map(|(index, mag)| Peak {
            index,
            frequency_hz: self.frequencies[index],
            level_db: magnitude_db(mag),
        })
    }
}

/// Amplitude in decibels, `20·log10(|X|)`. Zero maps to negative infinity.
pub fn magnitude_db(magnitude: f64) -> f64 {
    20.0 * magnitude.log10()
}

/// Bin centre frequencies for an `n`-point DFT with sample spacing `d`,
/// in unshifted order: `0, 1, ..., (n-1)/2, -(n/2), ..., -1` times `1/(n·d)`.
pub fn fft_freq(n: usize, d: f64) -> Vec<f64> {
    let scale = 1.0 / (n as f64 * d);
    let positive = (n + 1) / 2;
    (0..n)
        .map(|k| {
            if k < positive {
                k as f64 * scale
            } else {
                (k as f64 - n as f64) * scale
            }
        })
        .collect()
}

/// Move the zero-frequency entry to the centre by rotating right `n / 2`.
pub fn fft_shift<T: Clone>(values: &[T]) -> Vec<T> {
    let mut shifted = values.to_vec();
    shifted.rotate_right(values.len() / 2);
    shifted
}
