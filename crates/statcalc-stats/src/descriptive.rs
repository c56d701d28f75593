//! Mean, sample standard deviation, median and sample size.
//!
//! Each statistic is available both on a parsed [`Dataset`] and as a
//! string entry point that parses its input first.

use crate::{dataset::Dataset, error::StatsError, statistic::Statistic};

/// Rounds to two decimal places, with ties rounded up (toward positive infinity).
///
/// # Examples
///
/// ```
/// use statcalc_stats::descriptive::round2;
///
/// assert_eq!(round2(15.811_388), 15.81);
/// assert_eq!(round2(0.125), 0.13);
/// assert_eq!(round2(-0.125), -0.12);
/// ```
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

impl Dataset {
    /// Arithmetic mean, rounded to two decimal places.
    ///
    /// # Errors
    ///
    /// [`StatsError::UndefinedOperation`] if the dataset is empty.
    pub fn mean(&self) -> Result<f64, StatsError> {
        self.require(Statistic::Mean, 1)?;
        Ok(round2(self.unrounded_mean()))
    }

    /// Sample standard deviation (`n - 1` denominator), rounded to two decimal places.
    ///
    /// # Errors
    ///
    /// * [`StatsError::UndefinedOperation`] if the dataset is empty
    /// * [`StatsError::InsufficientData`] if the dataset has a single value
    #[expect(clippy::cast_precision_loss)]
    pub fn std_dev(&self) -> Result<f64, StatsError> {
        self.require(Statistic::StandardDeviation, 2)?;

        let mean = self.unrounded_mean();
        let squared_deviations = self
            .values()
            .iter()
            .map(|&x| (f64::from(x) - mean).powi(2))
            .sum::<f64>();
        let variance = squared_deviations / (self.len() - 1) as f64;
        Ok(round2(variance.sqrt()))
    }

    /// Middle value of the sorted data, or the average of the two middle values.
    ///
    /// The result is not rounded.
    ///
    /// # Errors
    ///
    /// [`StatsError::UndefinedOperation`] if the dataset is empty.
    pub fn median(&self) -> Result<f64, StatsError> {
        self.require(Statistic::Median, 1)?;

        let values = self.values();
        let mid = values.len() / 2;
        let median = if values.len() % 2 == 1 {
            f64::from(values[mid])
        } else {
            f64::midpoint(f64::from(values[mid - 1]), f64::from(values[mid]))
        };
        Ok(median)
    }

    /// Number of values. Defined for every dataset, including an empty one.
    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.len()
    }

    #[expect(clippy::cast_precision_loss)]
    fn unrounded_mean(&self) -> f64 {
        let sum = self.values().iter().copied().map(i64::from).sum::<i64>();
        sum as f64 / self.len() as f64
    }

    fn require(&self, statistic: Statistic, required: usize) -> Result<(), StatsError> {
        match self.len() {
            0 => Err(StatsError::UndefinedOperation { statistic }),
            actual if actual < required => Err(StatsError::InsufficientData {
                statistic,
                required,
                actual,
            }),
            _ => Ok(()),
        }
    }
}

/// Parses `input` and returns its mean, rounded to two decimal places.
///
/// # Errors
///
/// Returns [`StatsError::Parse`] if `input` is not a valid integer list.
pub fn mean(input: &str) -> Result<f64, StatsError> {
    Dataset::parse(input)?.mean()
}

/// Parses `input` and returns its sample standard deviation, rounded to two decimal places.
///
/// # Errors
///
/// Returns [`StatsError::Parse`] for invalid input and
/// [`StatsError::InsufficientData`] for fewer than two values.
pub fn std_dev(input: &str) -> Result<f64, StatsError> {
    Dataset::parse(input)?.std_dev()
}

/// Parses `input` and returns its median.
///
/// # Errors
///
/// Returns [`StatsError::Parse`] if `input` is not a valid integer list.
pub fn median(input: &str) -> Result<f64, StatsError> {
    Dataset::parse(input)?.median()
}

/// Parses `input` and returns the number of values.
///
/// # Errors
///
/// Returns [`StatsError::Parse`] if `input` is not a valid integer list.
pub fn sample_size(input: &str) -> Result<usize, StatsError> {
    Ok(Dataset::parse(input)?.sample_size())
}

#[cfg(test)]
#[expect(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    const FIVE: &str = "10, 20, 30, 40, 50";

    #[test]
    fn test_reference_values() {
        assert_eq!(mean(FIVE).unwrap(), 30.0);
        assert_eq!(std_dev(FIVE).unwrap(), 15.81);
        assert_eq!(median(FIVE).unwrap(), 30.0);
        assert_eq!(median("10,20,30,40").unwrap(), 25.0);
        assert_eq!(sample_size(FIVE).unwrap(), 5);
    }

    #[test]
    fn test_mean_rounds_to_two_decimals() {
        assert_eq!(mean("1,2").unwrap(), 1.5);
        assert_eq!(mean("0,0,1").unwrap(), 0.33);
        assert_eq!(mean("0,1,1").unwrap(), 0.67);
    }

    #[test]
    fn test_mean_ties_round_up() {
        // 1/8 and -1/8 are exact in binary, so these hit the tie exactly
        assert_eq!(mean("1,0,0,0,0,0,0,0").unwrap(), 0.13);
        assert_eq!(mean("-1,0,0,0,0,0,0,0").unwrap(), -0.12);
    }

    #[test]
    fn test_mean_does_not_overflow() {
        assert_eq!(mean("2147483647,2147483647").unwrap(), 2_147_483_647.0);
        assert_eq!(mean("-2147483648,-2147483648").unwrap(), -2_147_483_648.0);
    }

    #[test]
    fn test_std_dev_uses_sample_denominator() {
        // population SD of this set is 2.0, sample SD is sqrt(32 / 7)
        assert_eq!(std_dev("2,4,4,4,5,5,7,9").unwrap(), 2.14);
        assert_eq!(std_dev("5,5").unwrap(), 0.0);
        assert_eq!(std_dev("1,2").unwrap(), 0.71);
    }

    #[test]
    fn test_std_dev_requires_two_values() {
        assert_eq!(
            std_dev("7"),
            Err(StatsError::InsufficientData {
                statistic: Statistic::StandardDeviation,
                required: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_median_is_not_rounded() {
        assert_eq!(median("1,2").unwrap(), 1.5);
        assert_eq!(median("0,1,2,2").unwrap(), 1.5);
        assert_eq!(median("-3,-2").unwrap(), -2.5);
    }

    #[test]
    fn test_median_does_not_overflow() {
        assert_eq!(median("2147483647,2147483647").unwrap(), 2_147_483_647.0);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(mean("-4").unwrap(), -4.0);
        assert_eq!(median("-4").unwrap(), -4.0);
        assert_eq!(sample_size("-4").unwrap(), 1);
    }

    #[test]
    fn test_results_are_independent_of_token_order() {
        let permutations = [
            "10,20,30,40,50,7",
            "50,40,30,20,10,7",
            "7,30,10,50,20,40",
            "40,7,50,10,30,20",
        ];
        let expected = (
            mean(permutations[0]).unwrap(),
            std_dev(permutations[0]).unwrap(),
            median(permutations[0]).unwrap(),
        );
        for input in permutations {
            assert_eq!(
                (
                    mean(input).unwrap(),
                    std_dev(input).unwrap(),
                    median(input).unwrap()
                ),
                expected,
                "{input}"
            );
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        for _ in 0..3 {
            assert_eq!(mean(FIVE).unwrap(), 30.0);
            assert_eq!(std_dev(FIVE).unwrap(), 15.81);
        }
    }

    #[test]
    fn test_parse_errors_propagate() {
        for input in ["", "1, ,3", "a,b,c"] {
            assert!(matches!(mean(input), Err(StatsError::Parse(_))), "{input}");
            assert!(
                matches!(std_dev(input), Err(StatsError::Parse(_))),
                "{input}"
            );
            assert!(
                matches!(median(input), Err(StatsError::Parse(_))),
                "{input}"
            );
            assert!(
                matches!(sample_size(input), Err(StatsError::Parse(_))),
                "{input}"
            );
        }
        assert_eq!(
            sample_size(""),
            Err(StatsError::Parse(ParseError::EmptyInput))
        );
    }

    #[test]
    fn test_empty_dataset() {
        let empty = Dataset::default();
        assert_eq!(empty.sample_size(), 0);
        assert_eq!(
            empty.mean(),
            Err(StatsError::UndefinedOperation {
                statistic: Statistic::Mean
            })
        );
        assert_eq!(
            empty.median(),
            Err(StatsError::UndefinedOperation {
                statistic: Statistic::Median
            })
        );
        assert_eq!(
            empty.std_dev(),
            Err(StatsError::UndefinedOperation {
                statistic: Statistic::StandardDeviation
            })
        );
    }
}
