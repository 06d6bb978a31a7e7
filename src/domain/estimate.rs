use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distance, duration and fare of a candidate trip.
///
/// An estimate can only be created through [`Pricing::estimate`], which keeps the fare in line with the rates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    distance_km: f64,
    duration_min: u32,
    fare: u64,
}

impl Estimate {
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> u32 {
        self.duration_min
    }

    pub fn fare(&self) -> u64 {
        self.fare
    }

    /// Whether any component of the estimate is zero.
    pub fn is_degenerate(&self) -> bool {
        self.distance_km == 0.0 || self.duration_min == 0 || self.fare == 0
    }
}

/// The per kilometer and per minute rates trips are charged with.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawPricing")]
pub struct Pricing {
    rate_per_km: f64,
    rate_per_min: f64,
}

impl Pricing {
    pub fn new(rate_per_km: f64, rate_per_min: f64) -> Result<Self, InvalidPricing> {
        if !(rate_per_km > 0.0) {
            return Err(InvalidPricing::RatePerKm(rate_per_km));
        }

        if !(rate_per_min > 0.0) {
            return Err(InvalidPricing::RatePerMin(rate_per_min));
        }

        Ok(Pricing { rate_per_km, rate_per_min })
    }

    pub fn rate_per_km(&self) -> f64 {
        self.rate_per_km
    }

    pub fn rate_per_min(&self) -> f64 {
        self.rate_per_min
    }

    /// Returns the fare rounded to the nearest currency unit.
    pub fn fare(&self, distance_km: f64, duration_min: u32) -> u64 {
        let fare = distance_km * self.rate_per_km + f64::from(duration_min) * self.rate_per_min;
        fare.max(0.0).round() as u64
    }

    pub fn estimate(&self, distance_km: f64, duration_min: u32) -> Estimate {
        Estimate {
            distance_km,
            duration_min,
            fare: self.fare(distance_km, duration_min),
        }
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Pricing {
            rate_per_km: 40.0,
            rate_per_min: 5.0,
        }
    }
}

#[derive(Deserialize)]
struct RawPricing {
    rate_per_km: f64,
    rate_per_min: f64,
}

impl TryFrom<RawPricing> for Pricing {
    type Error = InvalidPricing;

    fn try_from(raw: RawPricing) -> Result<Self, Self::Error> {
        Pricing::new(raw.rate_per_km, raw.rate_per_min)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidPricing {
    #[error("invalid rate per km: {0}, must be positive")]
    RatePerKm(f64),
    #[error("invalid rate per minute: {0}, must be positive")]
    RatePerMin(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(40.0, 5.0, 18.0, 25, 845)]
    #[case(40.0, 5.0, 25.5, 45, 1245)]
    #[case(40.0, 5.0, 12.1, 29, 629)]
    #[case(50.0, 10.0, 10.0, 20, 700)]
    #[case(40.0, 5.0, 0.0, 0, 0)]
    #[case(12.5, 1.0, 1.1, 3, 17)]
    fn fare_is_linear_in_distance_and_duration(
        #[case] rate_per_km: f64,
        #[case] rate_per_min: f64,
        #[case] distance_km: f64,
        #[case] duration_min: u32,
        #[case] expected: u64,
    ) {
        let pricing = Pricing::new(rate_per_km, rate_per_min).unwrap();

        assert_eq!(pricing.fare(distance_km, duration_min), expected);
    }

    #[test]
    fn estimate_carries_the_computed_fare() {
        let estimate = Pricing::default().estimate(18.0, 25);

        assert_eq!(estimate.distance_km(), 18.0);
        assert_eq!(estimate.duration_min(), 25);
        assert_eq!(estimate.fare(), 845);
    }

    #[rstest]
    #[case(0.0, 10, true)]
    #[case(3.1, 0, true)]
    #[case(3.1, 15, false)]
    fn is_degenerate_when_a_component_is_zero(#[case] distance_km: f64, #[case] duration_min: u32, #[case] expected: bool) {
        assert_eq!(Pricing::default().estimate(distance_km, duration_min).is_degenerate(), expected);
    }

    #[rstest]
    #[case(0.0, 5.0, InvalidPricing::RatePerKm(0.0))]
    #[case(-1.0, 5.0, InvalidPricing::RatePerKm(-1.0))]
    #[case(40.0, 0.0, InvalidPricing::RatePerMin(0.0))]
    fn new_rejects_non_positive_rates(#[case] rate_per_km: f64, #[case] rate_per_min: f64, #[case] expected: InvalidPricing) {
        assert_eq!(Pricing::new(rate_per_km, rate_per_min), Err(expected));
    }

    #[test]
    fn deserialize_validates_rates() {
        let result = serde_json::from_str::<Pricing>(r#"{"rate_per_km": -3, "rate_per_min": 5}"#);

        assert!(result.is_err());
    }

    #[test]
    fn estimate_serializes_in_camel_case() {
        let json = serde_json::to_value(Pricing::default().estimate(25.5, 45)).unwrap();

        assert_eq!(json, serde_json::json!({ "distanceKm": 25.5, "durationMin": 45, "fare": 1245 }));
    }
}
