//! Date rendering for list pages and form inputs.
//!
//! The backend hands out ISO-8601 strings: timestamps for `created_at`,
//! bare dates for consultation scheduling. Lists render them pt-BR style
//! (`dd/mm/aaaa`); unparseable input passes through untouched rather than
//! blanking a table cell.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Wall-clock moment of `raw`, kept in the offset the backend rendered it
/// in. Accepts RFC 3339 and naive `yyyy-mm-ddThh:mm:ss` forms.
fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// `dd/mm/aaaa` rendering of a date or timestamp.
pub fn short_date(raw: &str) -> String {
    if let Some(dt) = parse_datetime(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    raw.to_owned()
}

/// `dd/mm/aaaa hh:mm` rendering. A bare date renders without the time
/// instead of inventing a midnight.
pub fn short_datetime(raw: &str) -> String {
    if let Some(dt) = parse_datetime(raw) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    raw.to_owned()
}

/// Calendar part of an ISO timestamp, as an `<input type="date">` value.
pub fn date_part(raw: &str) -> &str {
    raw.find('T').map_or(raw, |i| &raw[..i])
}

/// Today as `yyyy-mm-dd`, the default for new consultation dates. Empty
/// outside the browser.
pub fn today_iso() -> String {
    #[cfg(feature = "csr")]
    {
        let mut iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.truncate(10);
        iso
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
