//! Descriptive statistics over comma-separated integer input.
//!
//! This crate provides the calculation core of `statcalc`:
//!
//! - **Parsing**: turn a raw string such as `"10, 20, 30"` into a sorted [`Dataset`]
//! - **Descriptive statistics**: mean, sample standard deviation, median and sample size
//! - **Summary**: all four statistics computed in one pass, serializable for reports
//!
//! Every calculation is a pure function of its input. Failures are reported
//! as [`StatsError`] values and never panic.
//!
//! # Modules
//!
//! - [`dataset`]: Parsing raw input into an ascending-sorted sequence
//! - [`descriptive`]: The four statistics and the two-decimal rounding rule
//! - [`statistic`]: Selecting a statistic at runtime and formatting its value
//! - [`summary`]: Combined statistics for a dataset
//! - [`error`]: Error taxonomy shared by all calculations
//!
//! # Examples
//!
//! ## Computing a single statistic
//!
//! ```
//! let input = "10, 20, 30, 40, 50";
//! assert_eq!(statcalc_stats::mean(input).unwrap(), 30.0);
//! assert_eq!(statcalc_stats::std_dev(input).unwrap(), 15.81);
//! assert_eq!(statcalc_stats::median(input).unwrap(), 30.0);
//! assert_eq!(statcalc_stats::sample_size(input).unwrap(), 5);
//! ```
//!
//! ## Selecting a statistic at runtime
//!
//! ```
//! use statcalc_stats::statistic::Statistic;
//!
//! let value = Statistic::Median.compute("10, 20, 30, 40").unwrap();
//! assert_eq!(value.to_string(), "25.0");
//! ```
//!
//! ## Handling invalid input
//!
//! ```
//! use statcalc_stats::{StatsError, error::ParseError};
//!
//! let err = statcalc_stats::mean("1, ,3").unwrap_err();
//! assert!(matches!(err, StatsError::Parse(ParseError::InvalidToken { position: 2, .. })));
//! ```

pub use self::{
    dataset::Dataset,
    descriptive::{mean, median, sample_size, std_dev},
    error::{ParseError, StatsError},
    statistic::{StatValue, Statistic},
    summary::Summary,
};

pub mod dataset;
pub mod descriptive;
pub mod error;
pub mod statistic;
pub mod summary;
