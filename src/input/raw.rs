use std::fmt;
use std::io::Read;

use clap::ValueEnum;
use log::warn;
use rustfft::num_complex::Complex64;

use crate::error::{Error, Result};

/// Layout of one component (I or Q) in a headerless interleaved recording.
/// All multi-byte layouts are little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleFormat {
    Cs8,
    Cs16,
    Cs32,
    Cf32,
}

impl SampleFormat {
    pub fn bytes_per_component(&self) -> usize {
        match self {
            SampleFormat::Cs8 => 1,
            SampleFormat::Cs16 => 2,
            SampleFormat::Cs32 => 4,
            SampleFormat::Cf32 => 4,
        }
    }

    /// Decode one word; `word` must be exactly `bytes_per_component` long.
    fn decode(&self, word: &[u8]) -> f64 {
        match self {
            SampleFormat::Cs8 => (word[0] as i8) as f64,
            SampleFormat::Cs16 => i16::from_le_bytes([word[0], word[1]]) as f64,
            SampleFormat::Cs32 => i32::from_le_bytes([word[0], word[1], word[2], word[3]]) as f64,
            SampleFormat::Cf32 => f32::from_le_bytes([word[0], word[1], word[2], word[3]]) as f64,
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleFormat::Cs8 => "cs8",
            SampleFormat::Cs16 => "cs16",
            SampleFormat::Cs32 => "cs32",
            SampleFormat::Cf32 => "cf32",
        };
        f.write_str(name)
    }
}

/// Read a whole headerless recording and assemble it into complex samples.
///
/// Sample values are kept at their raw integer scale. Bytes left over after
/// the last whole word are dropped with a warning; an odd number of words is
/// an error.
pub fn read_raw<R: Read>(mut reader: R, format: SampleFormat) -> Result<Vec<Complex64>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let width = format.bytes_per_component();
    let leftover = bytes.len() % width;
    if leftover != 0 {
        warn!(
            "Ignoring {} trailing byte(s) that do not form a whole {} word",
            leftover, format
        );
    }

    let words: Vec<f64> = bytes
        .chunks_exact(width)
        .map(|word| format.decode(word))
        .collect();

    pair_iq(&words)
}

/// Pair consecutive words as (I, Q).
pub fn pair_iq(words: &[f64]) -> Result<Vec<Complex64>> {
    if words.len() % 2 != 0 {
        return Err(Error::OddSampleCount { words: words.len() });
    }

    Ok(words
        .chunks_exact(2)
        .map(|pair| Complex64::new(pair[0], pair[1]))
        .collect())
}
