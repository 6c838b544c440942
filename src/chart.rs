//! Per-day duty chart assembly.

use tracing::debug;

use crate::accumulator::{DutyInterval, StatusTotals, accumulate};
use crate::axis::{ChartLayout, Point};
use crate::interaction::HoverTracker;
use crate::step_path::{
    HoverRegion, StepPath, TransitionDot, build_step_path, hover_regions, transition_dots,
};
use crate::trip::{DayLog, DutyStatus};

/// Everything needed to draw one day's duty chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DayChart {
    pub day: u32,
    pub totals: StatusTotals,
    pub intervals: Vec<DutyInterval>,
    pub path: StepPath,
    pub regions: Vec<HoverRegion>,
    pub dots: Vec<TransitionDot>,
}

impl DayChart {
    pub fn build(log: &DayLog, layout: &ChartLayout) -> Self {
        let accumulation = accumulate(&log.segments);
        let path = build_step_path(&accumulation.intervals, layout);
        let regions = hover_regions(&accumulation.intervals, layout);
        let dots = transition_dots(&accumulation.intervals, layout);

        debug!(
            day = log.day,
            intervals = accumulation.intervals.len(),
            hours = accumulation.totals.sum(),
            "built duty chart"
        );

        Self {
            day: log.day,
            totals: accumulation.totals,
            intervals: accumulation.intervals,
            path,
            regions,
            dots,
        }
    }

    /// Header text shown while nothing is hovered.
    pub fn summary_line(&self) -> String {
        format!(
            "Driving: {:.1}h • On Duty: {:.1}h",
            self.totals.driving, self.totals.on_duty
        )
    }

    /// Per-row total labels (`"7.0h"`), in row order.
    pub fn row_totals(&self) -> Vec<(DutyStatus, String)> {
        DutyStatus::ROWS
            .iter()
            .map(|&status| (status, format!("{:.1}h", self.totals.get(status))))
            .collect()
    }

    /// Topmost hover region under a point.
    pub fn region_at(&self, point: Point) -> Option<&HoverRegion> {
        self.regions.iter().rev().find(|region| region.rect.contains(point))
    }
}

pub fn build_day_charts(logs: &[DayLog], layout: &ChartLayout) -> Vec<DayChart> {
    logs.iter().map(|log| DayChart::build(log, layout)).collect()
}

/// A day chart plus its own hover state.
#[derive(Debug, Clone)]
pub struct DayChartView {
    chart: DayChart,
    hover: HoverTracker,
}

impl DayChartView {
    pub fn new(chart: DayChart) -> Self {
        let hover = HoverTracker::new(chart.summary_line());
        Self { chart, hover }
    }

    pub fn chart(&self) -> &DayChart {
        &self.chart
    }

    /// Entering an interval region describes it; gaps keep the last description.
    pub fn pointer_move(&mut self, point: Point) {
        if let Some(region) = self.chart.region_at(point) {
            self.hover.pointer_enter(region.description.clone());
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hover.pointer_leave();
    }

    pub fn header_text(&self) -> &str {
        self.hover.text()
    }

    pub fn is_hovering(&self) -> bool {
        self.hover.is_hovering()
    }
}
