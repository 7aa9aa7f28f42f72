//! Seizure date extraction.
//!
//! Dates are written day first (`15/03/2024`, `15-03-24`, `15.03.2024`) and
//! always returned as `DD/MM/YYYY`. Validation is range-based only: day in
//! 1..=31, month in 1..=12, year in 1900..=2100. Calendar validity is not
//! checked, so `31/02/2024` is accepted.

use super::capture::windows_after_keywords;
use super::normalize::normalize_whitespace;
use super::patterns::DATE_DMY;
use super::vocabulary::{ARRIVAL_KEYWORDS, DATE_KEYWORDS};
use super::FieldExtractor;
use crate::models::record::Field;

const ARRIVAL_WINDOW: usize = 100;
const DATE_WINDOW: usize = 200;

/// Two-digit years below this pivot belong to the 2000s.
const CENTURY_PIVOT: u32 = 50;

/// Seizure date field extractor.
pub struct SeizureDateExtractor;

impl FieldExtractor for SeizureDateExtractor {
    fn field(&self) -> Field {
        Field::DataApreensao
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_data_apreensao(text)
    }
}

/// Extract the seizure date.
///
/// The arrival time at the scene ("Chegada local") is preferred; generic
/// date labels are tried next.
pub fn extract_data_apreensao(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);

    first_valid_date(windows_after_keywords(&text, &ARRIVAL_KEYWORDS, ARRIVAL_WINDOW))
        .or_else(|| first_valid_date(windows_after_keywords(&text, &DATE_KEYWORDS, DATE_WINDOW)))
}

/// Normalize a single day-first date to `DD/MM/YYYY`.
pub fn normalize_date(raw: &str) -> Option<String> {
    first_valid_date(std::iter::once(raw.trim()))
}

fn first_valid_date<'a>(windows: impl Iterator<Item = &'a str>) -> Option<String> {
    windows
        .flat_map(|window| DATE_DMY.captures_iter(window))
        .find_map(|caps| format_date(&caps[1], &caps[2], &caps[3]))
}

fn format_date(day: &str, month: &str, year: &str) -> Option<String> {
    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let mut year_value: u32 = year.parse().ok()?;

    if year.len() == 2 {
        year_value += if year_value < CENTURY_PIVOT { 2000 } else { 1900 };
    }

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) || !(1900..=2100).contains(&year_value) {
        return None;
    }

    Some(format!("{:02}/{:02}/{:04}", day, month, year_value))
}
