//! Planned-stops timeline.

use crate::summary::group_thousands;
use crate::trip::{Stop, StopKind};

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub kind: StopKind,
    pub glyph: &'static str,
    pub color: &'static str,
    pub label: String,
    /// `Hr 10.5`
    pub hour_badge: String,
    /// `Mi 1,250`
    pub mile_badge: Option<String>,
    pub map_link: Option<String>,
    /// Whether a line runs down to the next entry.
    pub connector: bool,
}

fn meta(kind: StopKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        StopKind::Pickup => ("📦", "var(--accent-green)", "Pickup"),
        StopKind::Dropoff => ("🏁", "var(--accent-red)", "Drop-off"),
        StopKind::Fuel => ("⛽", "var(--accent-amber)", "Fuel Stop"),
        StopKind::Rest => ("🛏️", "var(--accent-indigo)", "Rest Period"),
    }
}

pub fn timeline_entries(stops: &[Stop]) -> Vec<TimelineEntry> {
    stops
        .iter()
        .enumerate()
        .map(|(i, stop)| {
            let (glyph, color, default_label) = meta(stop.kind);
            let label = match stop.name.as_deref() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => default_label.to_string(),
            };
            TimelineEntry {
                kind: stop.kind,
                glyph,
                color,
                label,
                hour_badge: format!("Hr {}", stop.hour),
                mile_badge: stop.mile.map(|mile| format!("Mi {}", group_thousands(mile))),
                map_link: stop.map_link.clone(),
                connector: i + 1 < stops.len(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries() {
        let mut rest = Stop::new(StopKind::Rest, 11.0);
        rest.mile = Some(605.5);
        rest.name = Some(String::new());
        let mut dropoff = Stop::new(StopKind::Dropoff, 26.25);
        dropoff.name = Some("Chicago, IL".to_string());
        dropoff.map_link = Some("https://maps.google.com/?q=41.88,-87.63".to_string());

        let entries = timeline_entries(&[Stop::new(StopKind::Pickup, 1.0), rest, dropoff]);
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].label, "Pickup");
        assert_eq!(entries[0].hour_badge, "Hr 1");
        assert_eq!(entries[0].mile_badge, None);
        assert!(entries[0].connector);

        assert_eq!(entries[1].label, "Rest Period");
        assert_eq!(entries[1].glyph, "🛏️");
        assert_eq!(entries[1].mile_badge.as_deref(), Some("Mi 605.5"));

        assert_eq!(entries[2].label, "Chicago, IL");
        assert_eq!(entries[2].hour_badge, "Hr 26.25");
        assert!(entries[2].map_link.is_some());
        assert!(!entries[2].connector);
    }

    #[test]
    fn test_no_stops() {
        assert!(timeline_entries(&[]).is_empty());
    }
}
