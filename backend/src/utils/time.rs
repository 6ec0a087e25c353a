use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;

/// Accepted spellings of a clock time, tried in order.
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%I:%M %p"];

/// Returns the current time in the given timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// 12-hour clock without a leading zero on the hour, e.g. `3:05 PM`.
pub fn format_time(time: &NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    for format in TIME_FORMATS {
        match NaiveTime::parse_from_str(text, format) {
            Ok(time) => return Some(time),
            Err(err) => tracing::debug!(input = text, format, error = %err, "time format did not match"),
        }
    }
    None
}

/// Parses `Region/Location` into a zone, `None` when the name is unknown.
pub fn parse_time_zone(name: &str) -> Option<Tz> {
    name.parse().ok()
}
