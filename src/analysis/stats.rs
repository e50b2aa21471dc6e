//! Summary statistics over extracted roll results.

use std::collections::HashMap;
use std::fmt;

use crate::error::{BotError, Result};

/// Most frequent value of a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Unique(i64),
    /// The highest frequency is shared by more than one value
    NoUniqueMode,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Unique(value) => write!(f, "{value}"),
            Mode::NoUniqueMode => f.write_str("No unique mode"),
        }
    }
}

/// Statistics for a non-empty set of results.
///
/// `average` and `mean` hold the same value; both are reported.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub sample_count: usize,
    pub average: f64,
    pub mean: f64,
    pub mode: Mode,
}

/// Compute average, mean and mode of `results`.
///
/// Returns [`BotError::NoResults`] when there is nothing to analyze.
#[allow(clippy::cast_precision_loss)]
pub fn analyze(results: &[i64]) -> Result<AnalysisResult> {
    if results.is_empty() {
        return Err(BotError::NoResults);
    }

    let count = results.len();
    let sum: i128 = results.iter().copied().map(i128::from).sum();
    let average = sum as f64 / count as f64;
    let mean = sum as f64 / count as f64;

    Ok(AnalysisResult {
        sample_count: count,
        average,
        mean,
        mode: mode(results),
    })
}

fn mode(results: &[i64]) -> Mode {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &value in results {
        *counts.entry(value).or_default() += 1;
    }

    let max_count = counts.values().copied().max().unwrap_or(0);
    let mut most_common = counts
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(value, _)| value);

    match (most_common.next(), most_common.next()) {
        (Some(value), None) => Mode::Unique(value),
        _ => Mode::NoUniqueMode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(analyze(&[]), Err(BotError::NoResults)));
    }

    #[test]
    fn computes_average_mean_and_mode() -> std::result::Result<(), BotError> {
        let analysis = analyze(&[3, 3, 5])?;
        assert_eq!(analysis.sample_count, 3);
        assert!((analysis.average - 11.0 / 3.0).abs() < 1e-9);
        assert!((analysis.mean - analysis.average).abs() < f64::EPSILON);
        assert_eq!(analysis.mode, Mode::Unique(3));
        Ok(())
    }

    #[test]
    fn tie_has_no_unique_mode() -> std::result::Result<(), BotError> {
        let analysis = analyze(&[1, 2])?;
        assert_eq!(analysis.mode, Mode::NoUniqueMode);
        assert!((analysis.average - 1.5).abs() < f64::EPSILON);

        let analysis = analyze(&[7, 7, 2, 2, 9])?;
        assert_eq!(analysis.mode, Mode::NoUniqueMode);
        Ok(())
    }

    #[test]
    fn single_sample_is_its_own_mode() -> std::result::Result<(), BotError> {
        let analysis = analyze(&[-4])?;
        assert_eq!(analysis.mode, Mode::Unique(-4));
        assert!((analysis.mean + 4.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn large_values_do_not_overflow() -> std::result::Result<(), BotError> {
        let analysis = analyze(&[i64::MAX, i64::MAX])?;
        assert_eq!(analysis.mode, Mode::Unique(i64::MAX));
        assert!(analysis.average > 9.0e18);
        Ok(())
    }

    #[test]
    fn mode_display() {
        assert_eq!(Mode::Unique(12).to_string(), "12");
        assert_eq!(Mode::NoUniqueMode.to_string(), "No unique mode");
    }
}
