//! Segment accumulation: durations to absolute intervals and per-status totals.

use tracing::warn;

use crate::trip::{DutySegment, DutyStatus};

/// A duty segment placed on the day's hour axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DutyInterval {
    pub status: DutyStatus,
    pub start_hour: f64,
    pub end_hour: f64,
}

impl DutyInterval {
    pub fn duration(&self) -> f64 {
        self.end_hour - self.start_hour
    }
}

/// Total hours per duty status.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatusTotals {
    pub off_duty: f64,
    pub sleeper: f64,
    pub driving: f64,
    pub on_duty: f64,
}

impl StatusTotals {
    pub fn get(&self, status: DutyStatus) -> f64 {
        match status {
            DutyStatus::OffDuty => self.off_duty,
            DutyStatus::Sleeper => self.sleeper,
            DutyStatus::Driving => self.driving,
            DutyStatus::OnDuty => self.on_duty,
        }
    }

    fn add(&mut self, status: DutyStatus, hours: f64) {
        let slot = match status {
            DutyStatus::OffDuty => &mut self.off_duty,
            DutyStatus::Sleeper => &mut self.sleeper,
            DutyStatus::Driving => &mut self.driving,
            DutyStatus::OnDuty => &mut self.on_duty,
        };
        *slot += hours;
    }

    pub fn sum(&self) -> f64 {
        self.off_duty + self.sleeper + self.driving + self.on_duty
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Accumulation {
    pub intervals: Vec<DutyInterval>,
    pub totals: StatusTotals,
}

/// Lays segments end to end starting at hour 0.
///
/// Intervals are contiguous: each starts where the previous one ended. End
/// hours are not capped at 24; clipping is a drawing concern. Non-finite or
/// negative durations are counted as zero.
pub fn accumulate(segments: &[DutySegment]) -> Accumulation {
    let mut intervals = Vec::with_capacity(segments.len());
    let mut totals = StatusTotals::default();
    let mut hour = 0.0;

    for segment in segments {
        let hours = sanitize_hours(segment.hours);
        intervals.push(DutyInterval {
            status: segment.status,
            start_hour: hour,
            end_hour: hour + hours,
        });
        totals.add(segment.status, hours);
        hour += hours;
    }

    Accumulation { intervals, totals }
}

fn sanitize_hours(hours: f64) -> f64 {
    if hours.is_finite() && hours >= 0.0 {
        hours
    } else {
        warn!(hours, "invalid segment duration, counting as zero");
        0.0
    }
}
