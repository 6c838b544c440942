//! trip-viz geometry engine
//!
//! Projects a computed trip plan into drawable form: per-day duty charts,
//! the route path and viewport, and stop markers along the route.

pub mod trip;
pub mod accumulator;
pub mod axis;
pub mod clock;
pub mod step_path;
pub mod chart;
pub mod haversine;
pub mod polyline;
pub mod viewport;
pub mod placement;
pub mod map;
pub mod interaction;
pub mod timeline;
pub mod summary;
pub mod planner;
pub mod session;
