use chrono::{Datelike, NaiveDate};

use crate::error::ParseError;

/// A typed cell. Cells are typed opportunistically at ingest: integer first,
/// then float, with anything else kept as text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
}

impl Value {
    pub fn as_display(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => {
                if f.fract() == 0.0 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::String(_) => None,
        }
    }
}

/// Types a raw cell. Blank cells become the missing-value marker; numeric
/// detection tolerates surrounding whitespace so typing is stable whether it
/// runs before or after the trim pass.
pub fn parse_cell(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Some(Value::Integer(parsed));
    }
    if let Ok(parsed) = trimmed.parse::<f64>() {
        return Some(Value::Float(parsed));
    }
    Some(Value::String(trimmed.to_string()))
}

/// Parses the dataset's `m/d/yy` release dates. The two-digit year resolves
/// through chrono's POSIX window first; any result later than `today` is
/// pulled back a century, so raw "12/15/74" is 1974-12-15 and raw "1/1/50"
/// lands in 1950 rather than 2050.
pub fn parse_release_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, ParseError> {
    let parsed = NaiveDate::parse_from_str(raw, "%m/%d/%y")
        .map_err(|_| ParseError::new(raw, "release date (m/d/yy)"))?;
    if parsed.year() > today.year() {
        parsed
            .with_year(parsed.year() - 100)
            .ok_or_else(|| ParseError::new(raw, "release date (m/d/yy)"))
    } else {
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[test]
    fn parse_cell_types_numbers_and_text() {
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("   "), None);
        assert_eq!(parse_cell("42"), Some(Value::Integer(42)));
        assert_eq!(parse_cell(" 42 "), Some(Value::Integer(42)));
        assert_eq!(parse_cell("7.5"), Some(Value::Float(7.5)));
        assert_eq!(parse_cell("Jaws"), Some(Value::String("Jaws".to_string())));
    }

    #[test]
    fn numeric_accessors_cross_convert() {
        assert_eq!(Value::Float(100.0).as_i64(), Some(100));
        assert_eq!(Value::Float(7.5).as_i64(), None);
        assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
        assert_eq!(Value::String("x".to_string()).as_f64(), None);
    }

    #[test]
    fn float_display_drops_trailing_zero() {
        assert_eq!(Value::Float(8.0).as_display(), "8");
        assert_eq!(Value::Float(7.5).as_display(), "7.5");
    }

    #[test]
    fn release_date_keeps_past_two_digit_years() {
        let parsed = parse_release_date("12/15/74", today()).unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(1974, 12, 15).unwrap());
    }

    #[test]
    fn release_date_pulls_future_years_back_a_century() {
        let parsed = parse_release_date("1/1/50", today()).unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(1950, 1, 1).unwrap());
    }

    #[test]
    fn release_date_recent_years_stay_current_century() {
        let parsed = parse_release_date("6/9/15", today()).unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2015, 6, 9).unwrap());
    }

    #[test]
    fn release_date_rejects_other_formats() {
        assert!(parse_release_date("2015-06-09", today()).is_err());
        assert!(parse_release_date("not a date", today()).is_err());
        assert!(parse_release_date("", today()).is_err());
    }
}
