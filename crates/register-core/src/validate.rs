// crates/register-core/src/validate.rs - Input validation for appointment fields
//
// Every check here is a pure predicate over a string. The interactive layer
// calls them in a re-prompt loop; the store never calls them, so a hand-edited
// file with odd values still loads.

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

/// Optional sign followed by ASCII digits
static WHOLE_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]+$").expect("whole number pattern is a valid regex")
});

/// `DD/MM/YYYY` with ASCII digits only
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("date pattern is a valid regex")
});

/// `HH:MM` with ASCII digits only
static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2})$").expect("time pattern is a valid regex")
});

/// Check that a patient name is non-empty and made of ASCII letters and spaces
///
/// ```
/// use register_core::validate::is_valid_name;
///
/// assert!(is_valid_name("Ada Lovelace"));
/// assert!(!is_valid_name("R2-D2"));
/// assert!(!is_valid_name(""));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Check that a date is written as `DD/MM/YYYY` and exists on the calendar
///
/// The shape is matched first, then the day/month/year triple is handed to
/// chrono, which applies the proleptic Gregorian leap-year rule (every fourth
/// year, except centuries not divisible by 400).
///
/// ```
/// use register_core::validate::is_valid_date;
///
/// assert!(is_valid_date("29/02/2000"));
/// assert!(!is_valid_date("29/02/1900"));
/// assert!(!is_valid_date("1/2/2024"));
/// ```
pub fn is_valid_date(date: &str) -> bool {
    let Some(caps) = DATE_PATTERN.captures(date) else {
        return false;
    };

    let (Ok(day), Ok(month), Ok(year)) = (
        caps[1].parse::<u32>(),
        caps[2].parse::<u32>(),
        caps[3].parse::<i32>(),
    ) else {
        return false;
    };

    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Check that a time is written as `HH:MM` on a 24-hour clock
pub fn is_valid_time(time: &str) -> bool {
    let Some(caps) = TIME_PATTERN.captures(time) else {
        return false;
    };

    let (Ok(hour), Ok(minute)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) else {
        return false;
    };

    NaiveTime::from_hms_opt(hour, minute, 0).is_some()
}

/// Check that the input is a whole number, possibly signed or out of range
///
/// This is what a patient-number prompt accepts. Whether such a number can
/// belong to a patient is `parse_patient_no`'s business.
pub fn is_whole_number(input: &str) -> bool {
    WHOLE_NUMBER_PATTERN.is_match(input.trim())
}

/// Parse a patient number typed by the user
///
/// Surrounding whitespace is ignored. Zero, negatives, numbers too large for
/// a patient number and anything that is not a whole number yield `None`.
pub fn parse_patient_no(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|&n| n > 0)
}

/// Fold carriage returns and line feeds into spaces
///
/// Free-text fields are stored one per line, so a stray `\r` typed into the
/// reason must not reach the file.
pub fn to_single_line(input: &str) -> String {
    input.replace(['\r', '\n'], " ")
}
