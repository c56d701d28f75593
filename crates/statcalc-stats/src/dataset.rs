use std::str::FromStr;

use crate::error::ParseError;

/// An ascending-sorted sequence of integers parsed from user input.
///
/// The values are sorted once at construction and never change afterwards,
/// so order-dependent statistics such as the median can index directly.
///
/// # Examples
///
/// ```
/// use statcalc_stats::Dataset;
///
/// let dataset = Dataset::parse(" 30, 10 ,20").unwrap();
/// assert_eq!(dataset.values(), &[10, 20, 30]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    values: Vec<i32>,
}

impl Dataset {
    /// Parses a comma-separated list of integers.
    ///
    /// Each token is trimmed of surrounding whitespace and parsed as a base-10
    /// `i32`. The resulting values are sorted in ascending order.
    ///
    /// # Errors
    ///
    /// * [`ParseError::EmptyInput`] - if `input` is empty or whitespace only
    /// * [`ParseError::InvalidToken`] - if any token is empty, non-numeric, or out of range
    ///
    /// # Examples
    ///
    /// ```
    /// use statcalc_stats::{Dataset, ParseError};
    ///
    /// assert_eq!(Dataset::parse("").unwrap_err(), ParseError::EmptyInput);
    /// assert!(Dataset::parse("1,,3").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let values = input
            .split(',')
            .enumerate()
            .map(|(i, token)| {
                let token = token.trim();
                token
                    .parse::<i32>()
                    .map_err(|source| ParseError::InvalidToken {
                        position: i + 1,
                        token: token.to_owned(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::trace!("parsed {} values from input", values.len());
        Ok(Self::from_values(values))
    }

    /// Builds a dataset from already-parsed values, sorting them.
    ///
    /// Unlike [`Dataset::parse`], this accepts an empty sequence.
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_unstable();
        Self { values }
    }

    /// Returns the values in ascending order.
    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromStr for Dataset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
