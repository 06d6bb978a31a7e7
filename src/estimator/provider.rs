use crate::domain::GeoPoint;
use crate::extensions::float_ext::RoundToDecimals;
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;

/// A live source of driving distance and duration between two points.
#[async_trait]
pub trait RouteProvider: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    async fn measure(&self, origin: GeoPoint, destination: GeoPoint) -> Result<RouteMeasurement, ProviderError>;
}

/// Raw driving distance and duration as reported by a route provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeasurement {
    distance_m: u64,
    duration_s: u64,
}

impl RouteMeasurement {
    pub fn new(distance_m: u64, duration_s: u64) -> Self {
        RouteMeasurement { distance_m, duration_s }
    }

    pub fn distance_km(&self) -> f64 {
        (self.distance_m as f64 / 1000.0).round_to(1)
    }

    /// Whole minutes, rounded up.
    pub fn duration_min(&self) -> u32 {
        u32::try_from(self.duration_s.div_ceil(60)).unwrap_or(u32::MAX)
    }
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("route provider answered with status '{0}'")]
    NotOk(String),
    #[error("malformed route provider response: {0}")]
    Malformed(String),
    #[error("no answer within {0:?}")]
    Timeout(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(18_000, 18.0)]
    #[case(12_149, 12.1)]
    #[case(12_150, 12.2)]
    #[case(49, 0.0)]
    #[case(0, 0.0)]
    fn distance_km_rounds_to_one_decimal(#[case] distance_m: u64, #[case] expected: f64) {
        assert_eq!(RouteMeasurement::new(distance_m, 0).distance_km(), expected);
    }

    #[rstest]
    #[case(1500, 25)]
    #[case(1501, 26)]
    #[case(1, 1)]
    #[case(59, 1)]
    #[case(0, 0)]
    fn duration_min_rounds_up(#[case] duration_s: u64, #[case] expected: u32) {
        assert_eq!(RouteMeasurement::new(0, duration_s).duration_min(), expected);
    }
}
