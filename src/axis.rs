//! Axis and grid projection for the duty chart.
//!
//! Every pixel position on the chart (gridlines, labels, data) goes through
//! [`ChartLayout::hour_to_x`] and [`ChartLayout::row_to_y`] so that all of them
//! line up exactly.

use crate::clock::axis_label;
use crate::trip::DutyStatus;

/// Hours spanned by the horizontal axis.
pub const DAY_HOURS: f64 = 24.0;

/// Number of status rows.
pub const ROW_COUNT: usize = 4;

/// A point in chart pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in chart pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Fixed chart geometry, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub total_width: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub row_height: f64,
    /// Space below the last row for hour labels.
    pub axis_gutter: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            total_width: 900.0,
            left: 100.0,
            right: 50.0,
            top: 30.0,
            row_height: 40.0,
            axis_gutter: 30.0,
        }
    }
}

impl ChartLayout {
    pub fn chart_width(&self) -> f64 {
        self.total_width - self.left - self.right
    }

    pub fn rows_bottom(&self) -> f64 {
        self.top + self.row_height * ROW_COUNT as f64
    }

    pub fn total_height(&self) -> f64 {
        self.rows_bottom() + self.axis_gutter
    }

    pub fn hour_to_x(&self, hour: f64) -> f64 {
        self.left + (hour / DAY_HOURS) * self.chart_width()
    }

    /// Vertical centre of a status row.
    pub fn row_to_y(&self, row: usize) -> f64 {
        self.row_top(row) + self.row_height / 2.0
    }

    pub fn row_top(&self, row: usize) -> f64 {
        self.top + row as f64 * self.row_height
    }

    /// Inverse of [`hour_to_x`](Self::hour_to_x), clamped to the day.
    pub fn x_to_hour(&self, x: f64) -> f64 {
        let width = self.chart_width();
        if width <= 0.0 {
            return 0.0;
        }
        ((x - self.left) / width * DAY_HOURS).clamp(0.0, DAY_HOURS)
    }

    /// Row under a vertical pixel position, if inside the grid.
    pub fn y_to_row(&self, y: f64) -> Option<usize> {
        if y < self.top || y >= self.rows_bottom() || self.row_height <= 0.0 {
            return None;
        }
        Some(((y - self.top) / self.row_height) as usize)
    }

    /// Hourly vertical gridlines, 0 through 24.
    pub fn gridlines(&self) -> Vec<Gridline> {
        (0..=DAY_HOURS as u32)
            .map(|hour| Gridline {
                hour,
                x: self.hour_to_x(hour as f64),
                y1: self.top,
                y2: self.rows_bottom(),
                major: hour % 6 == 0,
            })
            .collect()
    }

    /// Hour labels below the grid, every other hour.
    pub fn hour_labels(&self) -> Vec<AxisLabel> {
        (0..=DAY_HOURS as u32)
            .filter(|hour| hour % 2 == 0)
            .map(|hour| AxisLabel {
                text: axis_label(hour),
                position: Point::new(self.hour_to_x(hour as f64), self.rows_bottom() + 16.0),
            })
            .collect()
    }

    /// Horizontal dividers at the top of each row and the bottom of the last.
    pub fn row_dividers(&self) -> Vec<(Point, Point)> {
        (0..=ROW_COUNT)
            .map(|row| {
                let y = self.row_top(row);
                (
                    Point::new(self.left, y),
                    Point::new(self.left + self.chart_width(), y),
                )
            })
            .collect()
    }

    /// Background band for each status row.
    pub fn row_bands(&self) -> Vec<RowBand> {
        DutyStatus::ROWS
            .iter()
            .map(|&status| {
                let row = status.row();
                RowBand {
                    status,
                    rect: Rect {
                        x: self.left,
                        y: self.row_top(row),
                        width: self.chart_width(),
                        height: self.row_height,
                    },
                    shaded: row % 2 == 1,
                    label_anchor: Point::new(self.left - 8.0, self.row_to_y(row) + 4.0),
                    total_anchor: Point::new(
                        self.left + self.chart_width() + 8.0,
                        self.row_to_y(row) + 4.0,
                    ),
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gridline {
    pub hour: u32,
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
    /// Every sixth hour is drawn heavier.
    pub major: bool,
}

impl Gridline {
    pub fn stroke_width(&self) -> f64 {
        if self.major { 1.5 } else { 0.5 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowBand {
    pub status: DutyStatus,
    pub rect: Rect,
    /// Odd rows get the darker fill.
    pub shaded: bool,
    /// Right-anchored status label, left of the grid.
    pub label_anchor: Point,
    /// Left-anchored hour total, right of the grid.
    pub total_anchor: Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let layout = ChartLayout::default();
        assert_eq!(layout.chart_width(), 750.0);
        assert_eq!(layout.total_height(), 220.0);
    }

    #[test]
    fn test_hour_axis_endpoints() {
        for width in [100.0, 750.0, 1234.5] {
            let layout = ChartLayout {
                total_width: width + 150.0,
                ..ChartLayout::default()
            };
            assert_eq!(layout.hour_to_x(0.0), layout.left);
            assert!((layout.hour_to_x(24.0) - (layout.left + width)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_row_centres() {
        let layout = ChartLayout::default();
        assert_eq!(layout.row_to_y(0), 50.0);
        assert_eq!(layout.row_to_y(3), 170.0);
    }

    #[test]
    fn test_inverse_projection() {
        let layout = ChartLayout::default();
        assert!((layout.x_to_hour(layout.hour_to_x(7.5)) - 7.5).abs() < 1e-9);
        assert_eq!(layout.x_to_hour(0.0), 0.0);
        assert_eq!(layout.y_to_row(layout.row_to_y(2)), Some(2));
        assert_eq!(layout.y_to_row(10.0), None);
        assert_eq!(layout.y_to_row(layout.rows_bottom()), None);
    }

    #[test]
    fn test_gridlines_and_labels_share_projection() {
        let layout = ChartLayout::default();
        let lines = layout.gridlines();
        assert_eq!(lines.len(), 25);
        assert!(lines[0].major && lines[6].major && !lines[7].major);
        assert_eq!(lines[7].stroke_width(), 0.5);

        let labels = layout.hour_labels();
        assert_eq!(labels.len(), 13);
        for label in &labels {
            assert!(lines.iter().any(|line| line.x == label.position.x));
        }
        assert_eq!(labels[0].text, "MN");
        assert_eq!(labels[6].text, "N");
        assert_eq!(labels[12].text, "MN");
    }

    #[test]
    fn test_row_dividers_and_bands() {
        let layout = ChartLayout::default();
        let dividers = layout.row_dividers();
        assert_eq!(dividers.len(), 5);
        assert_eq!(dividers[4].0.y, layout.rows_bottom());

        let bands = layout.row_bands();
        assert_eq!(bands.len(), 4);
        assert!(!bands[0].shaded);
        assert!(bands[1].shaded);
        assert_eq!(bands[2].status, DutyStatus::Driving);
        assert_eq!(bands[0].label_anchor.x, 92.0);
        assert_eq!(bands[0].total_anchor.x, 858.0);
    }
}
