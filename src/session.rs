//! Current trip state and what the results area should show.
//!
//! Submissions are numbered. Only the response to the most recent submission
//! is applied; an older response arriving late is discarded so it cannot
//! overwrite a newer plan or error.

use tracing::{info, warn};

use crate::axis::ChartLayout;
use crate::chart::{DayChart, build_day_charts};
use crate::planner::{PlanError, TripPlanner};
use crate::trip::{TripRequest, TripResult, TripRoute};

pub const LOADING_TEXT: &str = "Computing optimal route...";

pub const NO_DRIVING_TIME_TEXT: &str =
    "No driving time available. You may be out of hours for this cycle.";

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer submission was issued; the response was ignored.
    Stale,
}

/// What the results area under the map shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsView<'a> {
    Hidden,
    NoDrivingTime,
    Ready(&'a TripResult),
}

#[derive(Debug, Default)]
pub struct TripSession {
    trip: Option<TripResult>,
    error: Option<String>,
    loading: bool,
    latest: u64,
}

impl TripSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a submission: clears the error banner and raises the loading flag.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        RequestTicket(self.latest)
    }

    /// Applies a response. Failures keep the previous trip.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<TripResult, PlanError>,
    ) -> Completion {
        if ticket.0 != self.latest {
            warn!(ticket = ticket.0, latest = self.latest, "discarding stale plan response");
            return Completion::Stale;
        }

        self.loading = false;
        match result {
            Ok(trip) => {
                info!(days = trip.day_logs.len(), "trip plan applied");
                self.trip = Some(trip);
            }
            Err(err) => {
                warn!(error = %err, "trip plan failed");
                self.error = Some(err.to_string());
            }
        }
        Completion::Applied
    }

    /// Runs one blocking submission end to end.
    pub fn submit<P: TripPlanner>(&mut self, planner: &P, request: &TripRequest) -> Completion {
        let ticket = self.begin();
        let result = planner.plan(request);
        self.complete(ticket, result)
    }

    pub fn trip(&self) -> Option<&TripResult> {
        self.trip.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_banner(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Route for the map; stays visible while a new plan loads.
    pub fn map_route(&self) -> Option<&TripRoute> {
        self.trip.as_ref().map(|trip| &trip.route)
    }

    pub fn results(&self) -> ResultsView<'_> {
        match &self.trip {
            Some(_) if self.loading => ResultsView::Hidden,
            Some(trip) if !trip.has_duty_hours() => ResultsView::NoDrivingTime,
            Some(trip) => ResultsView::Ready(trip),
            None => ResultsView::Hidden,
        }
    }

    pub fn day_charts(&self, layout: &ChartLayout) -> Vec<DayChart> {
        match self.results() {
            ResultsView::Ready(trip) => build_day_charts(&trip.day_logs, layout),
            ResultsView::Hidden | ResultsView::NoDrivingTime => Vec::new(),
        }
    }
}
