use std::num::ParseIntError;

use crate::statistic::Statistic;

/// Failure to turn raw input into a [`Dataset`](crate::Dataset).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The input is empty or contains only whitespace.
    #[display("no values entered")]
    EmptyInput,
    /// A comma-separated token is not a valid base-10 `i32`.
    ///
    /// `position` is 1-based; `token` is the trimmed token text.
    #[display("invalid integer {token:?} at token {position}")]
    InvalidToken {
        position: usize,
        token: String,
        source: ParseIntError,
    },
}

/// Errors returned by the statistic calculations.
///
/// `Parse` displays the parse failure itself, so it is not reported again
/// as a source.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum StatsError {
    #[display("{_0}")]
    Parse(#[error(not(source))] ParseError),
    #[display("{statistic} requires at least {required} values, got {actual}")]
    #[from(skip)]
    InsufficientData {
        statistic: Statistic,
        required: usize,
        actual: usize,
    },
    #[display("{statistic} is undefined for an empty dataset")]
    #[from(skip)]
    UndefinedOperation { statistic: Statistic },
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_invalid_token_keeps_parse_source() {
        let source = "x".parse::<i32>().unwrap_err();
        let err = ParseError::InvalidToken {
            position: 3,
            token: "x".to_owned(),
            source,
        };
        assert!(err.source().is_some());
        assert_eq!(
            StatsError::from(err).to_string(),
            "invalid integer \"x\" at token 3"
        );
    }

    #[test]
    fn test_error_chain_has_no_repeated_message() {
        let err = crate::mean("a").unwrap_err();
        assert!(matches!(err, StatsError::Parse(_)));

        let mut messages = vec![err.to_string()];
        let mut source = err.source();
        while let Some(e) = source {
            messages.push(e.to_string());
            source = e.source();
        }
        assert_eq!(messages, ["invalid integer \"a\" at token 1"]);
    }

    #[test]
    fn test_messages_name_the_statistic() {
        let err = StatsError::InsufficientData {
            statistic: Statistic::StandardDeviation,
            required: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Standard Deviation requires at least 2 values, got 1"
        );

        let err = StatsError::UndefinedOperation {
            statistic: Statistic::Mean,
        };
        assert_eq!(err.to_string(), "Mean is undefined for an empty dataset");
    }
}
