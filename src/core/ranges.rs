use regex::Regex;
use std::sync::LazyLock;

static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Numeric extremes of a breed attribute, e.g. `6 - 13` lbs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(ValueRange { min: v, max: v }),
            Some(r) => Some(ValueRange {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    /// Whether the range satisfies both bounds (unset bounds always hold)
    #[inline]
    pub fn within(&self, min: Option<f64>, max: Option<f64>) -> bool {
        min.map_or(true, |lo| self.min >= lo) && max.map_or(true, |hi| self.max <= hi)
    }
}

/// Parse a `"min - max"` string by splitting on `-`
///
/// Pieces that are not numbers are skipped, so `"NaN - 18"` yields 18..18.
/// Returns `None` when nothing parses.
pub fn parse_dash_range(text: &str) -> Option<ValueRange> {
    ValueRange::from_values(
        text.split('-')
            .filter_map(|piece| piece.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite()),
    )
}

/// Parse every integer in the text, e.g. `"10 - 12 years"` or `"14 years"`
pub fn parse_integer_range(text: &str) -> Option<ValueRange> {
    ValueRange::from_values(
        INTEGER_RE
            .find_iter(text)
            .filter_map(|m| m.as_str().parse::<f64>().ok()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_range() {
        assert_eq!(parse_dash_range("3 - 6"), Some(ValueRange { min: 3.0, max: 6.0 }));
        assert_eq!(parse_dash_range("9 - 11.5"), Some(ValueRange { min: 9.0, max: 11.5 }));
        assert_eq!(parse_dash_range("25"), Some(ValueRange { min: 25.0, max: 25.0 }));
    }

    #[test]
    fn test_dash_range_partial_and_invalid() {
        assert_eq!(parse_dash_range("NaN - 18"), Some(ValueRange { min: 18.0, max: 18.0 }));
        assert_eq!(parse_dash_range("NaN"), None);
        assert_eq!(parse_dash_range(""), None);
        assert_eq!(parse_dash_range("unknown"), None);
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(
            parse_integer_range("10 - 12 years"),
            Some(ValueRange { min: 10.0, max: 12.0 })
        );
        assert_eq!(
            parse_integer_range("14 years"),
            Some(ValueRange { min: 14.0, max: 14.0 })
        );
        assert_eq!(parse_integer_range("years"), None);
    }

    #[test]
    fn test_within() {
        let range = ValueRange { min: 10.0, max: 20.0 };

        assert!(range.within(None, None));
        assert!(range.within(Some(10.0), Some(20.0)));
        assert!(!range.within(Some(11.0), None));
        assert!(!range.within(None, Some(19.0)));
    }
}
