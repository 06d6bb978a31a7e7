use crate::domain::{GeoPoint, Pricing};
use crate::estimator::haversine::haversine_km;
use crate::estimator::{EstimateSource, SourcedEstimate};
use crate::extensions::float_ext::RoundToDecimals;
use serde::Deserialize;
use tracing::debug;

/// Network free estimation from the straight-line distance between two points.
#[derive(Clone, Debug, PartialEq)]
pub struct FallbackEstimator {
    average_speed_kmh: f64,
    buffer_min: u32,
    demo_trip: DemoTrip,
}

/// Trip used in place of an estimate with a zero component, so a quote never shows a free ride.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct DemoTrip {
    pub distance_km: f64,
    pub duration_min: u32,
}

impl Default for DemoTrip {
    fn default() -> Self {
        DemoTrip {
            distance_km: 25.5,
            duration_min: 45,
        }
    }
}

impl FallbackEstimator {
    pub fn new(average_speed_kmh: f64, buffer_min: u32, demo_trip: DemoTrip) -> Self {
        FallbackEstimator {
            average_speed_kmh,
            buffer_min,
            demo_trip,
        }
    }

    pub fn estimate(&self, from: GeoPoint, to: GeoPoint, pricing: &Pricing) -> SourcedEstimate {
        let distance_km = haversine_km(from, to).round_to(1);
        let duration_min = self.duration_min(distance_km);
        let estimate = pricing.estimate(distance_km, duration_min);

        if estimate.is_degenerate() {
            debug!(%from, %to, ?estimate, "🧮 Degenerate estimate, substituting the demo trip");
            return SourcedEstimate::new(
                pricing.estimate(self.demo_trip.distance_km, self.demo_trip.duration_min),
                EstimateSource::Substituted,
            );
        }

        debug!(%from, %to, ?estimate, "🧮 Computed fallback estimate");
        SourcedEstimate::new(estimate, EstimateSource::Fallback)
    }

    fn duration_min(&self, distance_km: f64) -> u32 {
        let driving_min = (distance_km / self.average_speed_kmh * 60.0).ceil();
        (driving_min as u32).saturating_add(self.buffer_min)
    }
}

impl Default for FallbackEstimator {
    fn default() -> Self {
        FallbackEstimator::new(40.0, 10, DemoTrip::default())
    }
}
