//! Test fixtures for trip-viz.
//!
//! Provides:
//! - A realistic three-day Fort Worth → Chicago trip plan, as the planner's JSON
//! - A map surface that records every call made to it

pub mod fort_worth_chicago;
pub mod recording_surface;

pub use fort_worth_chicago::*;
pub use recording_surface::*;
