//! Regular-expression scans for checkable tokens

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use factlens_domain::ClaimCategory;
use regex::Regex;
use std::ops::Range;

/// Month name, optional day, four-digit year: "September 12, 2024", "May 2023"
const MONTH_DATE: &str = r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)(?:\s+\d{1,2}(?:st|nd|rd|th)?,?)?\s+\d{4}\b";

/// Numeric calendar date: "9/12/2024"
const SLASH_DATE: &str = r"\b\d{1,2}/\d{1,2}/\d{4}\b";

/// Bare four-digit year
const YEAR: &str = r"\b\d{4}\b";

/// Number with optional currency symbol and magnitude or unit suffix
const NUMBER: &str = r"(?:[$€£]|\b)\d+(?:,\d{3})*(?:\.\d+)?(?:\s*(?:(?i:million|billion|trillion|thousand|percent)\b|%|[kKMB]\b))?";

/// Rank used when two matches overlap; lower wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Priority {
    /// Explicit calendar date
    Date,
    /// Number carrying a currency symbol or unit
    QualifiedNumber,
    /// Four-digit token read as a year
    Year,
    /// Anything else numeric
    Number,
}

/// A match before overlap resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub bytes: Range<usize>,
    pub category: ClaimCategory,
    pub priority: Priority,
}

/// Compiled scans
pub(crate) struct PatternSet {
    month_date: Regex,
    slash_date: Regex,
    year: Regex,
    number: Regex,
}

impl PatternSet {
    /// Compile every pattern
    pub fn new() -> Result<Self, ExtractorError> {
        Ok(Self {
            month_date: Regex::new(MONTH_DATE)?,
            slash_date: Regex::new(SLASH_DATE)?,
            year: Regex::new(YEAR)?,
            number: Regex::new(NUMBER)?,
        })
    }

    /// Run the enabled scans over `text`
    ///
    /// Candidates may overlap; see [`resolve_overlaps`].
    pub fn scan(&self, text: &str, config: &ExtractorConfig) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        if config.detect_dates {
            for regex in [&self.month_date, &self.slash_date] {
                candidates.extend(regex.find_iter(text).map(|m| Candidate {
                    bytes: m.range(),
                    category: ClaimCategory::Date,
                    priority: Priority::Date,
                }));
            }
            candidates.extend(self.year.find_iter(text).map(|m| Candidate {
                bytes: m.range(),
                category: ClaimCategory::Date,
                priority: Priority::Year,
            }));
        }

        if config.detect_numbers {
            for m in self.number.find_iter(text) {
                let matched = m.as_str().trim();
                if matched.chars().count() <= config.min_significant_len {
                    continue;
                }
                let qualified = !matched.starts_with(|c: char| c.is_ascii_digit())
                    || !matched.ends_with(|c: char| c.is_ascii_digit());
                candidates.push(Candidate {
                    bytes: m.range(),
                    category: ClaimCategory::Number,
                    priority: if qualified {
                        Priority::QualifiedNumber
                    } else {
                        Priority::Number
                    },
                });
            }
        }

        candidates
    }
}

/// Keep the highest-priority candidates that do not overlap each other
///
/// Ties go to the longer match, then the earlier one. The result is sorted by
/// position.
pub(crate) fn resolve_overlaps(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.bytes.len().cmp(&a.bytes.len()))
            .then_with(|| a.bytes.start.cmp(&b.bytes.start))
    });

    let mut accepted: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let clashes = accepted
            .iter()
            .any(|kept| candidate.bytes.start < kept.bytes.end && kept.bytes.start < candidate.bytes.end);
        if !clashes {
            accepted.push(candidate);
        }
    }

    accepted.sort_by_key(|c| c.bytes.start);
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<(String, ClaimCategory)> {
        let patterns = PatternSet::new().unwrap();
        resolve_overlaps(patterns.scan(text, &ExtractorConfig::default()))
            .into_iter()
            .map(|c| (text[c.bytes].to_string(), c.category))
            .collect()
    }

    #[test]
    fn test_month_year() {
        assert_eq!(
            scan("shipped in September 2024"),
            vec![("September 2024".to_string(), ClaimCategory::Date)]
        );
    }

    #[test]
    fn test_month_day_year() {
        assert_eq!(
            scan("announced on September 12, 2024."),
            vec![("September 12, 2024".to_string(), ClaimCategory::Date)]
        );
    }

    #[test]
    fn test_slash_date() {
        assert_eq!(
            scan("filed 9/12/2024"),
            vec![("9/12/2024".to_string(), ClaimCategory::Date)]
        );
    }

    #[test]
    fn test_bare_year_is_date() {
        assert_eq!(scan("since 1976"), vec![("1976".to_string(), ClaimCategory::Date)]);
    }

    #[test]
    fn test_currency() {
        assert_eq!(scan("$799"), vec![("$799".to_string(), ClaimCategory::Number)]);
    }

    #[test]
    fn test_currency_beats_year() {
        assert_eq!(scan("costs $1999"), vec![("$1999".to_string(), ClaimCategory::Number)]);
    }

    #[test]
    fn test_magnitude_and_percent() {
        assert_eq!(
            scan("40 million pre-orders, up 12%"),
            vec![
                ("40 million".to_string(), ClaimCategory::Number),
                ("12%".to_string(), ClaimCategory::Number),
            ]
        );
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(
            scan("sold 1,200,000 units"),
            vec![("1,200,000".to_string(), ClaimCategory::Number)]
        );
    }

    #[test]
    fn test_short_numbers_dropped() {
        assert!(scan("iPhone 16 has 6 cores").is_empty());
        assert!(scan("ok").is_empty());
    }

    #[test]
    fn test_digits_inside_words_ignored() {
        assert!(scan("the A18 chip").is_empty());
    }

    #[test]
    fn test_disabled_detectors() {
        let patterns = PatternSet::new().unwrap();
        let config = ExtractorConfig {
            detect_numbers: false,
            ..Default::default()
        };
        let found = patterns.scan("$799 in 2024", &config);
        assert!(found.iter().all(|c| c.category == ClaimCategory::Date));
    }
}
