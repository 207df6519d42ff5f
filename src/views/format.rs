// Display helpers for timestamps, dates and times

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// "Just now", "5h ago", "Yesterday", then the calendar date
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - timestamp).num_minutes() as f64 / 60.0;
    if hours < 1.0 {
        "Just now".to_string()
    } else if hours < 24.0 {
        format!("{}h ago", hours.floor() as i64)
    } else if hours < 48.0 {
        "Yesterday".to_string()
    } else {
        timestamp.format("%-m/%-d/%Y").to_string()
    }
}

/// "Monday, November 25, 2024"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "18:00" -> "6:00 PM"; unparsable input is returned unchanged
pub fn twelve_hour(time: &str) -> String {
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(parsed) => parsed.format("%-I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}
