mod engine;
mod fallback;
mod haversine;
mod provider;

pub use engine::EstimationEngine;
pub use fallback::{DemoTrip, FallbackEstimator};
pub use provider::{ProviderError, RouteMeasurement, RouteProvider};

use crate::domain::Estimate;
use std::fmt;

/// Where an estimate came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EstimateSource {
    Live(&'static str),
    Fallback,
    Substituted,
}

impl fmt::Display for EstimateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateSource::Live(provider) => write!(f, "live ({})", provider),
            EstimateSource::Fallback => write!(f, "fallback"),
            EstimateSource::Substituted => write!(f, "fallback (demo trip)"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourcedEstimate {
    estimate: Estimate,
    source: EstimateSource,
}

impl SourcedEstimate {
    pub fn new(estimate: Estimate, source: EstimateSource) -> Self {
        SourcedEstimate { estimate, source }
    }

    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    pub fn source(&self) -> &EstimateSource {
        &self.source
    }

    pub fn into_estimate(self) -> Estimate {
        self.estimate
    }
}
