use ctfft::Complex64;

/// Reconstruction error of a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialError {
    pub max: f64,
    pub average: f64,
}

impl TrialError {
    /// Compares `reconstructed` against `original` element by element.
    ///
    /// Only the first `original.len()` elements are compared, the zero padding
    /// behind them is ignored.
    pub fn measure(original: &[Complex64], reconstructed: &[Complex64]) -> Self {
        let diff: Vec<f64> = original
            .iter()
            .zip(reconstructed.iter())
            .map(|(o, r)| r.sub(o).norm())
            .collect();

        Self {
            max: diff.iter().copied().fold(0.0, f64::max),
            average: average(&diff),
        }
    }
}

/// Error statistics of all trials for one input size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeReport {
    pub size: usize,
    pub trials: usize,
    pub average_max_error: f64,
    pub average_average_error: f64,
}

impl SizeReport {
    pub fn from_trials(size: usize, trials: &[TrialError]) -> Self {
        let max_errors: Vec<f64> = trials.iter().map(|t| t.max).collect();
        let avg_errors: Vec<f64> = trials.iter().map(|t| t.average).collect();

        Self {
            size,
            trials: trials.len(),
            average_max_error: average(&max_errors),
            average_average_error: average(&avg_errors),
        }
    }
}

/// Arithmetic mean, `0.0` for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(average(&[2.0]), 2.0);
        assert_eq!(average(&[1.0, 2.0, 3.0, 6.0]), 3.0);
    }

    #[test]
    fn test_measure_ignores_padding() {
        let original = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)];
        let reconstructed = [
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 1.5),
            Complex64::new(100.0, 100.0),
            Complex64::new(100.0, 100.0),
        ];

        let error = TrialError::measure(&original, &reconstructed);
        assert_eq!(error.max, 0.5);
        assert_eq!(error.average, 0.25);
    }

    #[test]
    fn test_measure_uses_magnitude() {
        let original = [Complex64::zero()];
        let reconstructed = [Complex64::new(3.0, 4.0)];

        let error = TrialError::measure(&original, &reconstructed);
        assert_eq!(error.max, 5.0);
        assert_eq!(error.average, 5.0);
    }

    #[test]
    fn test_size_report_averages_trials() {
        let trials = [
            TrialError {
                max: 2.0,
                average: 1.0,
            },
            TrialError {
                max: 4.0,
                average: 0.5,
            },
        ];

        let report = SizeReport::from_trials(333, &trials);
        assert_eq!(report.size, 333);
        assert_eq!(report.trials, 2);
        assert_eq!(report.average_max_error, 3.0);
        assert_eq!(report.average_average_error, 0.75);
    }
}
