use crate::domain::GeoPoint;
use serde::Serialize;

/// A human readable address and the coordinates it resolves to.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Location {
    address: String,
    #[serde(flatten)]
    coordinates: GeoPoint,
}

impl Location {
    pub fn new(address: impl Into<String>, coordinates: GeoPoint) -> Result<Self, EmptyAddress> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(EmptyAddress);
        }

        Ok(Location { address, coordinates })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn coordinates(&self) -> GeoPoint {
        self.coordinates
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
#[error("a location needs a non-empty address")]
pub struct EmptyAddress;
