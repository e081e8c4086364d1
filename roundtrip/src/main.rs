use std::time::Instant;

use clap::Parser;
use ctfft::{Complex64, FftError, Radix2Fft};
use rand_aes::tls::rand_f64;
use tracing::{Level, debug, error, info};

mod stats;
use stats::{SizeReport, TrialError};

#[derive(Parser, Debug)]
#[command(name = "roundtrip")]
#[command(about = "Measure forward/inverse FFT reconstruction error", long_about = None)]
struct Cli {
    /// Input lengths to test.
    #[arg(long, value_name = "LIST", value_delimiter = ',', default_values_t = [5, 16, 333, 1000, 4096, 65536])]
    sizes: Vec<usize>,
    /// Number of random trials averaged per size.
    #[arg(long, value_name = "N", default_value_t = 100)]
    trials: usize,
    /// Amplitude of the generated samples.
    #[arg(long, value_name = "F", default_value_t = 1.0)]
    scale: f64,
    /// Print the small fixed scenarios step by step.
    #[arg(long)]
    visual: bool,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    if let Err(err) = run(&cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), FftError> {
    if cli.visual {
        visual_debug(&[0.0, 1.0, 2.0, 3.0])?;
        visual_debug(&[1.0, 2.0, 3.0, 4.0, 0.0])?;
    }

    for &size in &cli.sizes {
        let start = Instant::now();
        let report = measure_size(size, cli.trials, cli.scale)?;
        info!(size, elapsed_ms = start.elapsed().as_secs_f64() * 1000.0, "size finished");

        println!("-----Test----");
        println!("Data size = {}", report.size);
        println!("Averaging = {}", report.trials);
        println!("Average max error = {:e}", report.average_max_error);
        println!("Average average error = {:e}", report.average_average_error);
        println!("-----End Test-----");
    }

    Ok(())
}

fn generate_data(size: usize, scale: f64) -> Vec<Complex64> {
    (0..size)
        .map(|_| Complex64::new(rand_f64() * scale, rand_f64() * scale))
        .collect()
}

/// Runs `trials` forward/inverse round trips over random data of length `size`.
fn measure_size(size: usize, trials: usize, scale: f64) -> Result<SizeReport, FftError> {
    let mut errors = Vec::with_capacity(trials);

    for trial in 0..trials {
        let input = generate_data(size, scale);
        let check = input.clone();

        let mut fft = Radix2Fft::new(input)?;
        fft.forward();
        fft.inverse();

        let error = TrialError::measure(&check, fft.as_slice());
        debug!(size, trial, max = error.max, average = error.average, "trial");
        errors.push(error);
    }

    Ok(SizeReport::from_trials(size, &errors))
}

fn print_buffer(title: &str, data: &[Complex64]) {
    println!("{title}");
    for value in data {
        println!("({}, {})", value.re, value.im);
    }
    println!("--------------------");
}

fn visual_debug(values: &[f64]) -> Result<(), FftError> {
    println!("-----Test_visual----");

    let input: Vec<Complex64> = values.iter().copied().map(Complex64::from).collect();
    let mut fft = Radix2Fft::new(input)?;
    print_buffer("Input padded data:", fft.as_slice());

    fft.forward();
    print_buffer("After FFT:", fft.as_slice());

    fft.inverse();
    print_buffer("After IFFT:", fft.as_slice());

    println!("----------End Test_visual----------");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_size_error_is_small() {
        for size in [5, 16, 333] {
            let report = measure_size(size, 4, 1000.0).unwrap();
            assert_eq!(report.trials, 4);
            assert!(
                report.average_max_error < 1e-8,
                "size {size}: {}",
                report.average_max_error
            );
            assert!(report.average_average_error <= report.average_max_error);
        }
    }

    #[test]
    fn test_measure_size_rejects_empty() {
        assert_eq!(measure_size(0, 1, 1.0), Err(FftError::EmptyInput));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["roundtrip"]);
        assert_eq!(cli.sizes, vec![5, 16, 333, 1000, 4096, 65536]);
        assert_eq!(cli.trials, 100);
        assert!(!cli.visual);
    }

    #[test]
    fn test_cli_size_list() {
        let cli = Cli::parse_from(["roundtrip", "--sizes", "8,9", "--trials", "3", "-vv"]);
        assert_eq!(cli.sizes, vec![8, 9]);
        assert_eq!(cli.trials, 3);
        assert_eq!(cli.verbose, 2);
    }
}
