use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

mod analyzer;
mod error;
mod input;
mod peaks;
mod plot;
mod spectrum;

use input::SampleFormat;

/// Plot the amplitude spectrum of an IQ recording
#[derive(Parser, Debug)]
#[command(name = "iq-spectrum")]
#[command(version, about, long_about = None)]
struct Args {
    /// Recording to analyze (raw interleaved I/Q, or stereo IQ WAV)
    #[arg(value_name = "INPUT", default_value = "build/samples.cs16")]
    input_file: PathBuf,

    /// Sample rate in Hz (WAV files use the rate in their header)
    #[arg(short, long, default_value = "10000000", value_parser = parse_rate)]
    rate: f64,

    /// Raw sample layout
    #[arg(long, value_enum, default_value_t = SampleFormat::Cs16)]
    format: SampleFormat,

    /// Print spectral peaks above the noise floor
    #[arg(long)]
    peaks: bool,

    /// Peak threshold above the noise floor in dB
    #[arg(long, default_value_t = peaks::DEFAULT_MARGIN_DB)]
    margin: f64,

    /// Print the summary only, without opening the plot window
    #[arg(long)]
    no_plot: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Accept only finite, positive sample rates
fn parse_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", value, e))?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(format!("sample rate must be a positive number of Hz, got '{}'", value));
    }
    Ok(rate)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let analysis = analyzer::analyze_file(&args.input_file, args.format, args.rate)?;
    let recording = &analysis.recording;

    println!(
        "{} samples at {} Hz ({:.6}s), strongest bin {:.1} Hz at {:.1} dB",
        recording.samples.len(),
        recording.sample_rate,
        recording.duration_secs(),
        analysis.strongest.frequency_hz,
        analysis.strongest.level_db
    );

    if args.peaks {
        let report = analysis.spectrum.peaks(args.margin);
        println!(
            "Noise floor {:.1} dB, threshold {:.1} dB, {} peak(s)",
            report.noise_floor_db,
            report.threshold_db,
            report.peaks.len()
        );
        for peak in &report.peaks {
            println!(
                "  Peak detected: {:.1} Hz ({:.1} dB)",
                peak.frequency_hz, peak.level_db
            );
        }
    }

    if !args.no_plot {
        let title = plot::window_title(&args.input_file, recording.captured);
        plot::show(title, &analysis.spectrum)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_accepts_positive_values() {
        assert_eq!(parse_rate("10000000"), Ok(10e6));
        assert_eq!(parse_rate("2.4e6"), Ok(2.4e6));
    }

    #[test]
    fn test_rate_rejects_unusable_values() {
        for bad in ["0", "-10e6", "NaN", "inf", "-0", "fast"] {
            assert!(parse_rate(bad).is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn test_cli_rejects_zero_rate() {
        assert!(Args::try_parse_from(["iq-spectrum", "--rate", "0"]).is_err());

        let args = Args::try_parse_from(["iq-spectrum", "-r", "1e6"]).unwrap();
        assert_eq!(args.rate, 1e6);
        assert_eq!(args.input_file, PathBuf::from("build/samples.cs16"));
    }
}
