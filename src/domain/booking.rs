use crate::domain::{Estimate, Location};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RideType {
    Instant,
    Scheduled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_phone: String,
    pub pickup: Location,
    pub dropoff: Location,
    #[serde(rename = "type")]
    pub ride_type: RideType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<DateTime<Utc>>,
    pub estimate: Estimate,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for RideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, Pricing};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn booking_uses_the_stored_json_layout() {
        let booking = Booking {
            id: "TRIP-42".to_string(),
            user_id: "USER-123".to_string(),
            user_name: "Jane Wanjiru".to_string(),
            user_phone: "+254712345678".to_string(),
            pickup: Location::new("Nairobi CBD", GeoPoint::new(-1.2921, 36.8219).unwrap()).unwrap(),
            dropoff: Location::new("Wilson Airport", GeoPoint::new(-1.3235, 36.8159).unwrap()).unwrap(),
            ride_type: RideType::Instant,
            scheduled_time: None,
            estimate: Pricing::default().estimate(3.6, 16),
            status: BookingStatus::Pending,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(&booking).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "TRIP-42",
                "userId": "USER-123",
                "userName": "Jane Wanjiru",
                "userPhone": "+254712345678",
                "pickup": { "address": "Nairobi CBD", "lat": -1.2921, "lng": 36.8219 },
                "dropoff": { "address": "Wilson Airport", "lat": -1.3235, "lng": 36.8159 },
                "type": "Instant",
                "estimate": { "distanceKm": 3.6, "durationMin": 16, "fare": 224 },
                "status": "Pending",
                "createdAt": "2026-03-01T08:30:00Z"
            })
        );
        assert_eq!(serde_json::from_value::<Booking>(json).unwrap(), booking);
    }
}
