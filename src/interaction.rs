//! Hover state for charts and map markers.
//!
//! Each chart or map owns one [`HoverTracker`]. Pointer events only change
//! the text shown in its header; they never touch derived geometry.

use crate::accumulator::DutyInterval;
use crate::clock::format_hour;
use crate::placement::PlacedMarker;
use crate::summary::group_thousands;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoverTracker {
    state: HoverState,
    summary: String,
}

impl HoverTracker {
    /// `summary` is shown whenever nothing is hovered.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            state: HoverState::Idle,
            summary: summary.into(),
        }
    }

    pub fn pointer_enter(&mut self, description: impl Into<String>) {
        self.state = HoverState::Hovering(description.into());
    }

    /// Leaving a target or the whole surface.
    pub fn pointer_leave(&mut self) {
        self.state = HoverState::Idle;
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }

    pub fn is_hovering(&self) -> bool {
        matches!(self.state, HoverState::Hovering(_))
    }

    /// Current header text: the hovered description, else the summary.
    pub fn text(&self) -> &str {
        match &self.state {
            HoverState::Hovering(description) => description,
            HoverState::Idle => &self.summary,
        }
    }
}

/// `Driving: 5.0h (12:00 AM – 5:00 AM)`
pub fn describe_interval(interval: &DutyInterval) -> String {
    format!(
        "{}: {:.1}h ({} – {})",
        interval.status.label(),
        interval.duration(),
        format_hour(interval.start_hour),
        format_hour(interval.end_hour)
    )
}

/// `Pilot Travel Center • Hour 10 • Mile 550`
pub fn describe_marker(marker: &PlacedMarker) -> String {
    let mut text = marker.label.clone();
    if let Some(hour) = marker.hour {
        text.push_str(&format!(" • Hour {}", hour));
    }
    if let Some(mile) = marker.mile {
        text.push_str(&format!(" • Mile {}", group_thousands(mile)));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::DutyStatus;

    #[test]
    fn test_enter_and_leave() {
        let mut hover = HoverTracker::new("Driving: 0.0h • On Duty: 0.0h");
        assert!(!hover.is_hovering());
        assert_eq!(hover.text(), "Driving: 0.0h • On Duty: 0.0h");

        hover.pointer_enter("Off Duty: 3.0h (5:00 AM – 8:00 AM)");
        assert!(hover.is_hovering());
        assert_eq!(hover.text(), "Off Duty: 3.0h (5:00 AM – 8:00 AM)");

        hover.pointer_leave();
        assert_eq!(hover.state(), &HoverState::Idle);
        assert_eq!(hover.text(), "Driving: 0.0h • On Duty: 0.0h");
    }

    #[test]
    fn test_only_latest_target_is_described() {
        let mut hover = HoverTracker::new("summary");
        hover.pointer_enter("first");
        hover.pointer_enter("second");
        assert_eq!(hover.state(), &HoverState::Hovering("second".to_string()));
    }

    #[test]
    fn test_describe_interval() {
        let interval = DutyInterval {
            status: DutyStatus::OffDuty,
            start_hour: 5.0,
            end_hour: 8.0,
        };
        assert_eq!(describe_interval(&interval), "Off Duty: 3.0h (5:00 AM – 8:00 AM)");
    }
}
