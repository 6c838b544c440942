//! HTTP client for the trip planning service.

use std::fmt;

use tracing::{info, warn};

use crate::trip::{TripRequest, TripResult};

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub base_url: String,
    pub plan_path: String,
    pub timeout_secs: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            plan_path: "/api/trip/plan".to_string(),
            timeout_secs: 30,
        }
    }
}

impl PlannerConfig {
    pub fn plan_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.plan_path.trim_start_matches('/')
        )
    }
}

#[derive(Debug)]
pub enum PlanError {
    /// Transport failure: connect, timeout, TLS.
    Http(reqwest::Error),
    /// The service answered with a non-success status.
    Status(u16, String),
    /// The body was not a trip plan.
    Decode(String),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Http(err) => write!(f, "{}", err),
            PlanError::Status(code, body) if body.is_empty() => {
                write!(f, "Request failed with status code {}", code)
            }
            PlanError::Status(code, body) => {
                write!(f, "Request failed with status code {}: {}", code, body)
            }
            PlanError::Decode(msg) => write!(f, "Invalid trip plan response: {}", msg),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Http(err) => Some(err),
            PlanError::Status(..) | PlanError::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for PlanError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PlanError::Decode(err.to_string())
        } else {
            PlanError::Http(err)
        }
    }
}

/// Source of computed trip plans.
pub trait TripPlanner {
    fn plan(&self, request: &TripRequest) -> Result<TripResult, PlanError>;
}

#[derive(Debug, Clone)]
pub struct PlannerClient {
    config: PlannerConfig,
    client: reqwest::blocking::Client,
}

impl PlannerClient {
    pub fn new(config: PlannerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}

impl TripPlanner for PlannerClient {
    fn plan(&self, request: &TripRequest) -> Result<TripResult, PlanError> {
        let url = self.config.plan_url();
        info!(%url, cycle_used_hours = request.cycle_used_hours, "requesting trip plan");

        let response = self.client.post(&url).json(request).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), "trip plan request rejected");
            return Err(PlanError::Status(status.as_u16(), body));
        }

        let trip = response.json::<TripResult>()?;
        info!(
            days = trip.day_logs.len(),
            stops = trip.route.stops.len(),
            points = trip.route.geometry.len(),
            "trip plan received"
        );
        Ok(trip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_url_joins_cleanly() {
        let config = PlannerConfig {
            base_url: "http://planner.local:8000/".to_string(),
            ..PlannerConfig::default()
        };
        assert_eq!(config.plan_url(), "http://planner.local:8000/api/trip/plan");
        assert_eq!(
            PlannerConfig::default().plan_url(),
            "http://localhost:8000/api/trip/plan"
        );
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(
            PlanError::Status(500, String::new()).to_string(),
            "Request failed with status code 500"
        );
        assert_eq!(
            PlanError::Status(400, "unknown location".to_string()).to_string(),
            "Request failed with status code 400: unknown location"
        );
    }
}
