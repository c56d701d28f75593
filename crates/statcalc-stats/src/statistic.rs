use std::fmt;

use crate::{dataset::Dataset, error::StatsError};

/// One of the statistics a caller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, serde::Serialize)]
pub enum Statistic {
    #[display("Mean")]
    Mean,
    #[display("Standard Deviation")]
    StandardDeviation,
    #[display("Median")]
    Median,
    #[display("Sample Size")]
    SampleSize,
}

impl Statistic {
    pub const ALL: [Self; 4] = [
        Self::Mean,
        Self::StandardDeviation,
        Self::Median,
        Self::SampleSize,
    ];

    /// Parses `input` and computes this statistic.
    ///
    /// # Examples
    ///
    /// ```
    /// use statcalc_stats::{StatValue, Statistic};
    ///
    /// assert_eq!(Statistic::SampleSize.compute("1,2,3"), Ok(StatValue::Count(3)));
    /// assert!(Statistic::StandardDeviation.compute("1").is_err());
    /// ```
    pub fn compute(self, input: &str) -> Result<StatValue, StatsError> {
        self.compute_on(&Dataset::parse(input)?)
    }

    /// Computes this statistic on an already parsed dataset.
    pub fn compute_on(self, dataset: &Dataset) -> Result<StatValue, StatsError> {
        let value = match self {
            Self::Mean => StatValue::Float(dataset.mean()?),
            Self::StandardDeviation => StatValue::Float(dataset.std_dev()?),
            Self::Median => StatValue::Float(dataset.median()?),
            Self::SampleSize => StatValue::Count(dataset.sample_size()),
        };
        Ok(value)
    }
}

/// The scalar produced by a [`Statistic`].
///
/// Floats without a fractional part are displayed with one decimal
/// (`30.0`); other floats use their shortest exact representation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Float(f64),
    Count(usize),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Count(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let labels = Statistic::ALL.map(|s| s.to_string());
        assert_eq!(
            labels,
            ["Mean", "Standard Deviation", "Median", "Sample Size"]
        );
    }

    #[test]
    fn test_compute_each_statistic() {
        let input = "10, 20, 30, 40, 50";
        assert_eq!(Statistic::Mean.compute(input), Ok(StatValue::Float(30.0)));
        assert_eq!(
            Statistic::StandardDeviation.compute(input),
            Ok(StatValue::Float(15.81))
        );
        assert_eq!(Statistic::Median.compute(input), Ok(StatValue::Float(30.0)));
        assert_eq!(
            Statistic::SampleSize.compute(input),
            Ok(StatValue::Count(5))
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(StatValue::Float(30.0).to_string(), "30.0");
        assert_eq!(StatValue::Float(-4.0).to_string(), "-4.0");
        assert_eq!(StatValue::Float(15.81).to_string(), "15.81");
        assert_eq!(StatValue::Float(2.5).to_string(), "2.5");
        assert_eq!(StatValue::Count(5).to_string(), "5");
    }
}
