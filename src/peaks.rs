use crate::spectrum::{magnitude_db, Peak, Spectrum};

/// Default peak threshold above the noise floor in dB
pub const DEFAULT_MARGIN_DB: f64 = 10.0;

/// Result of peak detection over one spectrum
#[derive(Debug, Clone)]
pub struct PeakReport {
    pub noise_floor_db: f64,
    pub threshold_db: f64,
    pub peaks: Vec<Peak>,
}

/// Median magnitude, taken as the noise floor estimate.
/// Even-length input averages the two middle values.
pub fn noise_floor(magnitudes: &[f64]) -> f64 {
    if magnitudes.is_empty() {
        return 0.0;
    }

    let mut sorted = magnitudes.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Find strict local maxima at least `margin_db` above the median magnitude.
/// The first and last bins have only one neighbour and are never reported.
/// The threshold is a hard gate: local maxima below it are never reported,
/// even where a per-block receiver detector would list them.
pub fn find_peaks(frequencies: &[f64], magnitudes: &[f64], margin_db: f64) -> PeakReport {
    let floor = noise_floor(magnitudes);
    let threshold = floor * 10f64.powf(margin_db / 20.0);

    let peaks = magnitudes
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[1] >= threshold && w[1] > w[0] && w[1] > w[2])
        .map(|(i, w)| Peak {
            index: i + 1,
            frequency_hz: frequencies[i + 1],
            level_db: magnitude_db(w[1]),
        })
        .collect();

    PeakReport {
        noise_floor_db: magnitude_db(floor),
        threshold_db: magnitude_db(threshold),
        peaks,
    }
}

impl Spectrum {
    pub fn peaks(&self, margin_db: f64) -> PeakReport {
        find_peaks(&self.frequencies, &self.magnitudes(), margin_db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfft::num_complex::Complex64;
    use std::f64::consts::PI;

    #[test]
    fn test_noise_floor_is_median() {
        assert_eq!(noise_floor(&[5.0, 1.0, 3.0]), 3.0);
        assert_eq!(noise_floor(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(noise_floor(&[]), 0.0);
    }

    #[test]
    fn test_flat_floor_has_no_peaks() {
        let freqs: Vec<f64> = (0..32).map(|i| i as f64).collect();
        let mags = vec![1.0; 32];
        let report = find_peaks(&freqs, &mags, DEFAULT_MARGIN_DB);

        assert!(report.peaks.is_empty());
        assert_eq!(report.noise_floor_db, 0.0);
        assert!((report.threshold_db - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_peaks_above_margin_are_reported() {
        let freqs: Vec<f64> = (0..16).map(|i| i as f64 * 100.0).collect();
        let mut mags = vec![1.0; 16];
        mags[4] = 50.0; // +34 dB
        mags[9] = 2.0; // +6 dB, under the 10 dB margin
        mags[12] = 4.0; // +12 dB
        mags[13] = 3.5;

        let report = find_peaks(&freqs, &mags, 10.0);
        let indices: Vec<usize> = report.peaks.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![4, 12]);
        assert_eq!(report.peaks[0].frequency_hz, 400.0);
        assert!((report.peaks[0].level_db - magnitude_db(50.0)).abs() < 1e-12);
    }

    #[test]
    fn test_edge_bins_are_skipped() {
        let freqs = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let mags = vec![100.0, 1.0, 1.0, 1.0, 100.0];
        assert!(find_peaks(&freqs, &mags, 0.0).peaks.is_empty());
    }

    #[test]
    fn test_two_tones_in_noise() {
        let n = 512;
        let sample_rate = 1_000_000.0;
        // Deterministic low-level noise so the median is well above rounding error.
        let mut state: u32 = 0x1234_5678;
        let mut noise = || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 8) as f64 / (1u32 << 24) as f64 - 0.5
        };

        let samples: Vec<Complex64> = (0..n)
            .map(|t| {
                let t = t as f64;
                let a = Complex64::from_polar(100.0, 2.0 * PI * 50.0 * t / n as f64);
                let b = Complex64::from_polar(40.0, -2.0 * PI * 100.0 * t / n as f64);
                a + b + Complex64::new(noise(), noise())
            })
            .collect();

        let spectrum = Spectrum::compute(&samples, sample_rate).unwrap();
        let report = spectrum.peaks(30.0);

        let mut found: Vec<f64> = report.peaks.iter().map(|p| p.frequency_hz).collect();
        found.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let bin_hz = sample_rate / n as f64;
        assert_eq!(found.len(), 2, "peaks: {:?}", report.peaks);
        assert!((found[0] + 100.0 * bin_hz).abs() < 1e-6);
        assert!((found[1] - 50.0 * bin_hz).abs() < 1e-6);
    }
}
