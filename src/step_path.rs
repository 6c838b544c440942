//! Step-function path through the duty chart.

use std::fmt::Write as _;

use crate::accumulator::DutyInterval;
use crate::axis::{ChartLayout, DAY_HOURS, Point, Rect};
use crate::interaction::describe_interval;
use crate::trip::DutyStatus;

/// Opacity of the coloured band behind each interval.
pub const REGION_OPACITY: f64 = 0.15;

pub const DOT_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
}

impl PathCommand {
    pub fn point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => point,
        }
    }
}

/// Ordered drawing instructions for the duty line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepPath {
    commands: Vec<PathCommand>,
}

impl StepPath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of strokes that stay on one row.
    pub fn horizontal_strokes(&self) -> usize {
        self.commands
            .windows(2)
            .filter(|pair| match pair[1] {
                PathCommand::LineTo(to) => to.y == pair[0].point().y,
                PathCommand::MoveTo(_) => false,
            })
            .count()
    }

    /// SVG path data (`M x y L x y ...`); empty for an empty path.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            let (op, point) = match command {
                PathCommand::MoveTo(point) => ('M', point),
                PathCommand::LineTo(point) => ('L', point),
            };
            let _ = write!(out, "{} {} {}", op, point.x, point.y);
        }
        out
    }
}

fn clip_hour(hour: f64) -> f64 {
    hour.clamp(0.0, DAY_HOURS)
}

/// Builds the duty line.
///
/// Moves to the first interval's start, then for each interval draws to its
/// start at its own row (a vertical jump when the row changes) and across to
/// its end. Hours past 24 are clipped to the edge of the chart.
pub fn build_step_path(intervals: &[DutyInterval], layout: &ChartLayout) -> StepPath {
    let Some(first) = intervals.first() else {
        return StepPath::default();
    };

    let mut commands = Vec::with_capacity(intervals.len() * 2 + 1);
    commands.push(PathCommand::MoveTo(Point::new(
        layout.hour_to_x(clip_hour(first.start_hour)),
        layout.row_to_y(first.status.row()),
    )));

    for (i, interval) in intervals.iter().enumerate() {
        let y = layout.row_to_y(interval.status.row());
        if i > 0 {
            commands.push(PathCommand::LineTo(Point::new(
                layout.hour_to_x(clip_hour(interval.start_hour)),
                y,
            )));
        }
        commands.push(PathCommand::LineTo(Point::new(
            layout.hour_to_x(clip_hour(interval.end_hour)),
            y,
        )));
    }

    StepPath { commands }
}

/// Pointer target covering one interval on its row.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverRegion {
    pub index: usize,
    pub status: DutyStatus,
    pub rect: Rect,
    pub description: String,
}

impl HoverRegion {
    pub fn color(&self) -> &'static str {
        self.status.color()
    }
}

pub fn hover_regions(intervals: &[DutyInterval], layout: &ChartLayout) -> Vec<HoverRegion> {
    intervals
        .iter()
        .enumerate()
        .map(|(index, interval)| {
            let x1 = layout.hour_to_x(clip_hour(interval.start_hour));
            let x2 = layout.hour_to_x(clip_hour(interval.end_hour));
            HoverRegion {
                index,
                status: interval.status,
                rect: Rect {
                    x: x1,
                    y: layout.row_top(interval.status.row()),
                    width: (x2 - x1).max(1.0),
                    height: layout.row_height,
                },
                description: describe_interval(interval),
            }
        })
        .collect()
}

/// Marker at the start of each interval.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionDot {
    pub center: Point,
    pub radius: f64,
    pub color: &'static str,
}

pub fn transition_dots(intervals: &[DutyInterval], layout: &ChartLayout) -> Vec<TransitionDot> {
    intervals
        .iter()
        .map(|interval| TransitionDot {
            center: Point::new(
                layout.hour_to_x(clip_hour(interval.start_hour)),
                layout.row_to_y(interval.status.row()),
            ),
            radius: DOT_RADIUS,
            color: interval.status.color(),
        })
        .collect()
}
