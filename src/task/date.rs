//! Due date validation (DD-MM-YYYY)

use chrono::NaiveDate;

/// The only accepted due date layout, as written by the user.
pub const DUE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a due date in day-month-year order.
///
/// Day and month take one or two digits, the year exactly four. Surrounding
/// whitespace, other separators and trailing text are rejected, and chrono
/// rejects dates that do not exist on the calendar.
pub fn parse_due_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('-');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(day, 1, 2) || !digits(month, 1, 2) || !digits(year, 4, 4) {
        return None;
    }

    NaiveDate::parse_from_str(text, DUE_DATE_FORMAT).ok()
}

/// Check if the text is an acceptable due date
pub fn is_valid_due_date(text: &str) -> bool {
    parse_due_date(text).is_some()
}
