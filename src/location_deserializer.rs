use crate::domain::{GeoPoint, Location};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            #[serde(alias = "latitude")]
            lat: f64,
            #[serde(alias = "longitude")]
            lng: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        GeoPoint::new(inner.lat, inner.lng).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            address: String,
            #[serde(alias = "latitude")]
            lat: f64,
            #[serde(alias = "longitude")]
            lng: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        let coordinates = GeoPoint::new(inner.lat, inner.lng).map_err(|e| D::Error::custom(format!("invalid location '{}': {}", inner.address, e)))?;
        Location::new(inner.address, coordinates).map_err(D::Error::custom)
    }
}
