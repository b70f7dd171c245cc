//! Numeric reading of the free-form salary text attached to a posting.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// An optional currency symbol followed by a number that may use comma
// thousands separators ("$50,000" or "50000").
static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([$£€])?\s*(\d{1,3}(?:,\d{3})+|\d+)").unwrap());

/// Smallest figure that still reads as a yearly salary.
const MIN_PLAUSIBLE: i64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryRange {
    pub currency: Option<char>,
    pub min: i64,
    pub max: Option<i64>,
}

impl SalaryRange {
    /// Extracts the first plausible amount as the minimum and the next one,
    /// if not lower, as the maximum. Returns `None` when the text carries no
    /// amount of at least 1000.
    pub fn parse(text: &str) -> Option<Self> {
        let mut amounts = AMOUNT.captures_iter(text).filter_map(|cap| {
            let digits: String = cap
                .get(2)?
                .as_str()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            let value = digits.parse::<i64>().ok()?;
            let currency = cap.get(1).and_then(|m| m.as_str().chars().next());
            (value >= MIN_PLAUSIBLE).then_some((currency, value))
        });

        let (currency, min) = amounts.next()?;
        let max = amounts
            .next()
            .map(|(_, value)| value)
            .filter(|value| *value >= min);
        Some(Self { currency, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dollar_range() {
        assert_eq!(
            SalaryRange::parse("$120,000 - $160,000"),
            Some(SalaryRange {
                currency: Some('$'),
                min: 120_000,
                max: Some(160_000),
            })
        );
    }

    #[test]
    fn test_parse_pound_and_euro_ranges() {
        let pounds = SalaryRange::parse("£80,000 - £100,000").unwrap();
        assert_eq!(pounds.currency, Some('£'));
        assert_eq!(pounds.max, Some(100_000));

        let euros = SalaryRange::parse("€70,000 - €90,000").unwrap();
        assert_eq!(euros.currency, Some('€'));
        assert_eq!(euros.min, 70_000);
    }

    #[test]
    fn test_parse_without_currency_symbol() {
        let range = SalaryRange::parse("Salary: 60000 USD").unwrap();
        assert_eq!(range.currency, None);
        assert_eq!(range.min, 60_000);
        assert_eq!(range.max, None);
    }

    #[test]
    fn test_parse_skips_small_numbers() {
        let range = SalaryRange::parse("Up to 5 days remote, $95,000/year").unwrap();
        assert_eq!(range.min, 95_000);
    }

    #[test]
    fn test_parse_no_salary() {
        assert_eq!(SalaryRange::parse("Competitive salary"), None);
    }
}
