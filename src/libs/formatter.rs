//! Formatting helpers shared by the stores, the backup documents and the views.
//!
//! ## Timestamps
//!
//! Creation and update times are kept as local wall-clock text in the
//! `YYYY-MM-DD HH:MM:SS` shape SQLite's `datetime()` produces. The
//! [`timestamp`] serde module writes that shape and reads it back, also
//! accepting ISO 8601 `T`-separated values with fractional seconds so older
//! backup documents still import.
//!
//! ## Display
//!
//! ```rust
//! use jtbd::libs::formatter::{priority_stars, status_mark};
//!
//! assert_eq!(priority_stars(3), "⭐⭐⭐");
//! assert_eq!(priority_stars(42), "42");
//! assert_eq!(status_mark(true), "✅");
//! ```

use crate::libs::forms::{MAX_TODO_PRIORITY, MIN_TODO_PRIORITY};
use chrono::{NaiveDate, NaiveDateTime, Timelike};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses `YYYY-MM-DD HH:MM:SS`, with either a space or `T` separator and
/// optional fractional seconds.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        // Values are stored at second resolution.
        .map(|dt| dt.with_nanosecond(0).unwrap_or(dt))
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Serde adapter for [`NaiveDateTime`] fields in the backup documents.
pub mod timestamp {
    use super::{format_timestamp, parse_timestamp};
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_timestamp(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_timestamp(&text).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{}'", text)))
    }
}

/// Same as [`timestamp`] for optional fields; `null` or a missing key is `None`.
pub mod option_timestamp {
    use super::{format_timestamp, parse_timestamp};
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&format_timestamp(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => parse_timestamp(&text)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{}'", text))),
            None => Ok(None),
        }
    }
}

/// One star per priority level. Imported values outside the form's range
/// are shown as the plain number.
pub fn priority_stars(priority: i32) -> String {
    if (MIN_TODO_PRIORITY..=MAX_TODO_PRIORITY).contains(&priority) {
        "⭐".repeat(priority as usize)
    } else {
        priority.to_string()
    }
}

pub fn status_mark(completed: bool) -> &'static str {
    if completed {
        "✅"
    } else {
        "⬜"
    }
}

/// prettytable style for a priority column: red for 4+, yellow for 2+, green otherwise.
pub fn priority_style(priority: i32) -> &'static str {
    if priority >= 4 {
        "Fr"
    } else if priority >= 2 {
        "Fy"
    } else {
        "Fg"
    }
}

/// prettytable style for a due date: bold red when overdue, yellow otherwise.
pub fn due_date_style(due_date: NaiveDate, today: NaiveDate) -> &'static str {
    if due_date < today {
        "bFr"
    } else {
        "Fy"
    }
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate)
}
