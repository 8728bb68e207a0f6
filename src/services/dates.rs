use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Field order and separator of a numeric date layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// `YYYY<sep>MM<sep>DD`
    YearFirst(char),
    /// `DD<sep>MM<sep>YYYY`
    DayFirst(char),
    /// `DD<sep>MM<sep>YY`
    DayFirstShortYear(char),
}

impl Layout {
    fn parse(self, s: &str) -> Option<NaiveDate> {
        let sep = match self {
            Layout::YearFirst(c) | Layout::DayFirst(c) | Layout::DayFirstShortYear(c) => c,
        };
        let parts: Vec<&str> = s.split(sep).collect();
        let [a, b, c] = parts.as_slice() else {
            return None;
        };

        let (year, month, day) = match self {
            Layout::YearFirst(_) => (full_year(a)?, short_field(b)?, short_field(c)?),
            Layout::DayFirst(_) => (full_year(c)?, short_field(b)?, short_field(a)?),
            Layout::DayFirstShortYear(_) => {
                (two_digit_year(c)?, short_field(b)?, short_field(a)?)
            }
        };

        NaiveDate::from_ymd_opt(year, month, day)
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn full_year(s: &str) -> Option<i32> {
    if s.len() != 4 || !all_digits(s) {
        return None;
    }
    s.parse().ok()
}

// 00-68 -> 2000-2068, 69-99 -> 1969-1999
fn two_digit_year(s: &str) -> Option<i32> {
    if s.len() != 2 || !all_digits(s) {
        return None;
    }
    let yy: i32 = s.parse().ok()?;
    Some(if yy < 69 { 2000 + yy } else { 1900 + yy })
}

fn short_field(s: &str) -> Option<u32> {
    if s.len() > 2 || !all_digits(s) {
        return None;
    }
    s.parse().ok()
}

/// Layouts accepted for dates handed directly to a booking operation.
const INPUT_LAYOUTS: [Layout; 4] = [
    Layout::YearFirst('-'),
    Layout::YearFirst('/'),
    Layout::DayFirst('/'),
    Layout::DayFirstShortYear('/'),
];

/// Layouts used to normalize a date substring found in free text.
const TEXT_LAYOUTS: [Layout; 6] = [
    Layout::DayFirst('/'),
    Layout::DayFirst('-'),
    Layout::YearFirst('/'),
    Layout::YearFirst('-'),
    Layout::DayFirstShortYear('/'),
    Layout::DayFirstShortYear('-'),
];

static TEXT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(\d{2}/\d{2}/\d{4})",
        r"(\d{2}-\d{2}-\d{4})",
        r"(\d{4}/\d{2}/\d{2})",
        r"(\d{4}-\d{2}-\d{2})",
        r"(\d{2}/\d{2}/\d{2})",
        r"(\d{2}-\d{2}-\d{2})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("date pattern is valid"))
    .collect()
});

static DATE_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2}[-/]\d{2}[-/]\d{2,4}|\d{4}[-/]\d{2}[-/]\d{2})")
        .expect("date candidate pattern is valid")
});

/// Parse a date in one of the accepted input formats, tried in order:
/// `YYYY-MM-DD`, `YYYY/MM/DD`, `DD/MM/YYYY`, `DD/MM/YY`.
///
/// Month-first dates are never assumed, so `01/02/03` is 1 February 2003.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    INPUT_LAYOUTS.iter().find_map(|layout| layout.parse(text))
}

/// Find the first date in free text and normalize it to `YYYY-MM-DD`.
///
/// Patterns are tried in a fixed order and the first match of the first
/// matching pattern wins. A match that is not a real calendar date falls
/// through to the next pattern.
pub fn extract_date_from_text(text: &str) -> Option<String> {
    TEXT_PATTERNS.iter().find_map(|pattern| {
        let found = pattern.find(text)?.as_str();
        TEXT_LAYOUTS
            .iter()
            .find_map(|layout| layout.parse(found))
            .map(to_iso)
    })
}

/// Every date-shaped substring of `text`, left to right.
pub fn find_date_candidates(text: &str) -> Vec<&str> {
    DATE_CANDIDATE.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Serde adapter: writes `YYYY-MM-DD`, reads any format [`parse_date`] accepts.
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_iso(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("unrecognised date: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_all_input_formats() {
        assert_eq!(parse_date("2025-01-03"), Some(ymd(2025, 1, 3)));
        assert_eq!(parse_date("2025/01/03"), Some(ymd(2025, 1, 3)));
        assert_eq!(parse_date("03/01/2025"), Some(ymd(2025, 1, 3)));
        assert_eq!(parse_date("03/01/25"), Some(ymd(2025, 1, 3)));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_date("  2025-06-16\n"), Some(ymd(2025, 6, 16)));
    }

    #[test]
    fn test_parse_is_day_first() {
        assert_eq!(parse_date("01/02/03"), Some(ymd(2003, 2, 1)));
        assert_eq!(parse_date("12/11/2025"), Some(ymd(2025, 11, 12)));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse_date("01/01/68"), Some(ymd(2068, 1, 1)));
        assert_eq!(parse_date("01/01/69"), Some(ymd(1969, 1, 1)));
    }

    #[test]
    fn test_parse_accepts_single_digit_day_and_month() {
        assert_eq!(parse_date("2025-1-5"), Some(ymd(2025, 1, 5)));
        assert_eq!(parse_date("5/1/2025"), Some(ymd(2025, 1, 5)));
    }

    #[test]
    fn test_parse_rejects_unknown_formats() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("tomorrow"), None);
        assert_eq!(parse_date("03-01-2025"), None);
        assert_eq!(parse_date("2025.01.03"), None);
        assert_eq!(parse_date("31/02/2025"), None);
        assert_eq!(parse_date("01/13/2025"), None);
        assert_eq!(parse_date("2025-01-03 extra"), None);
    }

    #[test]
    fn test_extract_from_sentence() {
        assert_eq!(
            extract_date_from_text("arriving 26/11/2025 please"),
            Some("2025-11-26".to_string())
        );
        assert_eq!(
            extract_date_from_text("on 2025/03/09"),
            Some("2025-03-09".to_string())
        );
        assert_eq!(
            extract_date_from_text("26-11-2025"),
            Some("2025-11-26".to_string())
        );
        assert_eq!(
            extract_date_from_text("26-11-25"),
            Some("2025-11-26".to_string())
        );
    }

    #[test]
    fn test_extract_prefers_pattern_order_over_position() {
        // The DD/MM/YYYY pattern is tried before YYYY-MM-DD, even though the
        // ISO date appears first in the text.
        assert_eq!(
            extract_date_from_text("2025-01-01 or 05/02/2025"),
            Some("2025-02-05".to_string())
        );
    }

    #[test]
    fn test_extract_skips_impossible_match() {
        assert_eq!(
            extract_date_from_text("99/99/9999 then 2025-04-01"),
            Some("2025-04-01".to_string())
        );
    }

    #[test]
    fn test_extract_none_without_date() {
        assert_eq!(extract_date_from_text("next friday"), None);
    }

    #[test]
    fn test_find_candidates_in_order() {
        let text = "Book Suite room for Maya from 01/02/2025 to 2025-02-05";
        assert_eq!(find_date_candidates(text), vec!["01/02/2025", "2025-02-05"]);
        assert!(find_date_candidates("no dates here").is_empty());
    }
}
