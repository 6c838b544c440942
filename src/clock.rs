//! 12-hour clock formatting for fractional hours.

/// Formats a fractional hour of the day as `h:mm AM|PM`.
///
/// The minute is the rounded fractional part; a value that rounds up to 60
/// carries into the next hour. Hours at or past 24 wrap around the clock, so
/// the end of a full day reads as midnight.
pub fn format_hour(hour: f64) -> String {
    let hour = if hour.is_finite() { hour.max(0.0) } else { 0.0 };
    let mut whole = hour.floor() as u64;
    let mut minutes = ((hour - hour.floor()) * 60.0).round() as u64;
    if minutes == 60 {
        whole += 1;
        minutes = 0;
    }

    let whole = whole % 24;
    let period = if whole >= 12 { "PM" } else { "AM" };
    let h12 = match whole {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}:{:02} {}", h12, minutes, period)
}

/// Axis tick label for a whole hour: midnight and noon are abbreviated.
pub fn axis_label(hour: u32) -> String {
    match hour {
        0 | 24 => "MN".to_string(),
        12 => "N".to_string(),
        h if h > 12 => (h - 12).to_string(),
        h => h.to_string(),
    }
}
