use hound::{SampleFormat, WavReader};
use rustfft::num_complex::Complex64;
use std::io::Read;

use crate::error::{Error, Result};

/// Read IQ samples from a stereo WAV recording (I=left channel, Q=right channel).
/// Returns the samples and the sample rate from the header.
pub fn read_iq_wav<R: Read>(reader: R) -> Result<(Vec<Complex64>, u32)> {
    let mut reader = WavReader::new(reader)?;
    let spec = reader.spec();

    if spec.channels != 2 {
        return Err(Error::ChannelCount(spec.channels));
    }

    let samples = match spec.sample_format {
        SampleFormat::Float => collect_pairs(reader.samples::<f32>().map(|s| s.map(f64::from)))?,
        SampleFormat::Int => collect_pairs(reader.samples::<i32>().map(|s| s.map(f64::from)))?,
    };

    Ok((samples, spec.sample_rate))
}

fn collect_pairs<I>(mut iter: I) -> Result<Vec<Complex64>>
where
    I: Iterator<Item = hound::Result<f64>>,
{
    let mut samples = Vec::new();

    while let (Some(i_result), Some(q_result)) = (iter.next(), iter.next()) {
        samples.push(Complex64::new(i_result?, q_result?));
    }

    Ok(samples)
}
