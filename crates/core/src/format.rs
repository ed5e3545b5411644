//! Pure formatting helpers shared by the shell and page screens.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::config::DateLocale;
use crate::error::{ShellError, ShellResult};

/// Join non-empty class fragments with single spaces.
pub fn class_names<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        for class in part.as_ref().split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(class);
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Dates
// ─────────────────────────────────────────────────────────────────────────────

/// Anything that can be read as a calendar date.
pub trait DateLike {
    fn to_calendar_date(&self) -> ShellResult<NaiveDate>;
}

impl DateLike for NaiveDate {
    fn to_calendar_date(&self) -> ShellResult<NaiveDate> {
        Ok(*self)
    }
}

impl DateLike for NaiveDateTime {
    fn to_calendar_date(&self) -> ShellResult<NaiveDate> {
        Ok(self.date())
    }
}

impl<Tz: TimeZone> DateLike for DateTime<Tz> {
    fn to_calendar_date(&self) -> ShellResult<NaiveDate> {
        Ok(self.date_naive())
    }
}

impl DateLike for str {
    fn to_calendar_date(&self) -> ShellResult<NaiveDate> {
        parse_date(self)
    }
}

impl DateLike for String {
    fn to_calendar_date(&self) -> ShellResult<NaiveDate> {
        parse_date(self)
    }
}

impl<T: DateLike + ?Sized> DateLike for &T {
    fn to_calendar_date(&self) -> ShellResult<NaiveDate> {
        (**self).to_calendar_date()
    }
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn parse_date(input: &str) -> ShellResult<NaiveDate> {
    let s = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| ShellError::invalid_date(format!("{input:?}: {e}")))
}

const MONTHS_RU_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Long-form localized date (`15 марта 2024 г.` / `March 15, 2024`).
///
/// Timestamps are rendered in the offset they carry.
pub fn format_date(input: impl DateLike, locale: DateLocale) -> ShellResult<String> {
    let date = input.to_calendar_date()?;
    let month = date.month0() as usize;
    Ok(match locale {
        DateLocale::Ru => format!("{} {} {} г.", date.day(), MONTHS_RU_GENITIVE[month], date.year()),
        DateLocale::En => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Match scores
// ─────────────────────────────────────────────────────────────────────────────

/// Ranked style bucket for a 0..=100 match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBucket {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreBucket {
    /// Text + background tone pair.
    pub fn class(&self) -> &'static str {
        match self {
            ScoreBucket::Excellent => "text-green-600 bg-green-50",
            ScoreBucket::Good => "text-blue-600 bg-blue-50",
            ScoreBucket::Fair => "text-yellow-600 bg-yellow-50",
            ScoreBucket::Poor => "text-red-600 bg-red-50",
        }
    }
}

/// Thresholds checked top-down; lower bounds are inclusive. Anything that
/// fails every comparison (negative, NaN) lands in [`ScoreBucket::Poor`].
pub fn score_bucket(score: f64) -> ScoreBucket {
    if score >= 80.0 {
        ScoreBucket::Excellent
    } else if score >= 60.0 {
        ScoreBucket::Good
    } else if score >= 40.0 {
        ScoreBucket::Fair
    } else {
        ScoreBucket::Poor
    }
}

pub fn score_color_class(score: f64) -> &'static str {
    score_bucket(score).class()
}

// ─────────────────────────────────────────────────────────────────────────────
// Text
// ─────────────────────────────────────────────────────────────────────────────

const ELLIPSIS: &str = "...";

/// Cut `text` to `max_length` characters and append `...`.
///
/// Text that already fits is returned unchanged; a non-positive limit on
/// longer text leaves only the marker.
pub fn truncate(text: &str, max_length: isize) -> String {
    let keep = usize::try_from(max_length).unwrap_or(0);
    match text.char_indices().nth(keep) {
        None => text.to_string(),
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len());
            out.push_str(&text[..cut]);
            out.push_str(ELLIPSIS);
            out
        }
    }
}
