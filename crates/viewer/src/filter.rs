use std::num::NonZeroU32;

use feed::FeedQuery;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("limit must be a whole number, got {0:?}")]
    InvalidLimit(String),
    #[error("limit must be at least 1")]
    ZeroLimit,
    #[error("minimum magnitude must be a number, got {0:?}")]
    InvalidMagnitude(String),
}

/// Builds a feed query from the filter form's raw text.
///
/// Blank fields fall back to `defaults`.
pub fn parse_filter(
    limit_text: &str,
    magnitude_text: &str,
    defaults: FeedQuery,
) -> Result<FeedQuery, FilterError> {
    let limit_text = limit_text.trim();
    let limit = if limit_text.is_empty() {
        defaults.limit
    } else {
        let n: u32 = limit_text
            .parse()
            .map_err(|_| FilterError::InvalidLimit(limit_text.to_string()))?;
        NonZeroU32::new(n).ok_or(FilterError::ZeroLimit)?
    };

    let magnitude_text = magnitude_text.trim();
    let min_magnitude = if magnitude_text.is_empty() {
        defaults.min_magnitude
    } else {
        magnitude_text
            .parse::<f64>()
            .ok()
            .filter(|m| m.is_finite())
            .ok_or_else(|| FilterError::InvalidMagnitude(magnitude_text.to_string()))?
    };

    Ok(FeedQuery::new(limit, min_magnitude))
}

#[cfg(test)]
mod tests {
    use super::{FilterError, parse_filter};
    use feed::FeedQuery;
    use std::num::NonZeroU32;

    fn defaults() -> FeedQuery {
        FeedQuery::new(NonZeroU32::new(20).unwrap(), 2.5)
    }

    #[test]
    fn parses_both_fields() {
        let q = parse_filter(" 50 ", "4.5", defaults()).unwrap();
        assert_eq!(q.limit.get(), 50);
        assert_eq!(q.min_magnitude, 4.5);
    }

    #[test]
    fn blank_fields_use_defaults() {
        assert_eq!(parse_filter("", "  ", defaults()).unwrap(), defaults());
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_filter("0", "1", defaults()), Err(FilterError::ZeroLimit));
        assert_eq!(
            parse_filter("-3", "1", defaults()),
            Err(FilterError::InvalidLimit("-3".into()))
        );
        assert_eq!(
            parse_filter("10", "big", defaults()),
            Err(FilterError::InvalidMagnitude("big".into()))
        );
        assert!(parse_filter("10", "NaN", defaults()).is_err());
    }
}
