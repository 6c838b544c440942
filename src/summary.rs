//! Headline statistics for a planned trip.

use crate::trip::{StopKind, TripResult};

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStat {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
    pub color: &'static str,
}

/// Distance, drive time, day count and intermediate stop count.
pub fn trip_summary(trip: &TripResult) -> Vec<SummaryStat> {
    let days = trip.day_logs.len();
    let stops = trip
        .route
        .stops
        .iter()
        .filter(|stop| matches!(stop.kind, StopKind::Fuel | StopKind::Rest))
        .count();

    vec![
        SummaryStat {
            label: "Total Distance",
            value: group_thousands(trip.distance_miles),
            unit: "miles",
            color: "var(--accent-cyan)",
        },
        SummaryStat {
            label: "Drive Time",
            value: trip.estimated_drive_hours.to_string(),
            unit: "hours",
            color: "var(--accent-amber)",
        },
        SummaryStat {
            label: "Trip Days",
            value: days.to_string(),
            unit: if days == 1 { "day" } else { "days" },
            color: "var(--accent-indigo)",
        },
        SummaryStat {
            label: "Stops",
            value: stops.to_string(),
            unit: if stops == 1 { "stop" } else { "stops" },
            color: "var(--accent-green)",
        },
    ]
}

/// Formats a number with comma thousands separators and at most three
/// fraction digits, trailing zeros dropped: `1234.5` → `1,234.5`.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = (value * 1000.0).round() / 1000.0;
    let text = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
