use crate::domain::{Booking, BookingStatus, GeoPoint, Location, Pricing, RideType};
use chrono::{TimeZone, Utc};
use std::path::PathBuf;

pub fn location(address: &str, latitude: f64, longitude: f64) -> Location {
    Location::new(address, GeoPoint::new(latitude, longitude).unwrap()).unwrap()
}

pub fn booking(id: &str) -> Booking {
    Booking {
        id: id.to_string(),
        user_id: "USER-123".to_string(),
        user_name: "Jane Wanjiru".to_string(),
        user_phone: "+254712345678".to_string(),
        pickup: location("Nairobi CBD", -1.2921, 36.8219),
        dropoff: location("Jomo Kenyatta International Airport (JKIA)", -1.3192, 36.9275),
        ride_type: RideType::Instant,
        scheduled_time: None,
        estimate: Pricing::default().estimate(12.1, 29),
        status: BookingStatus::Pending,
        notes: None,
        created_at: Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap(),
    }
}

/// A fresh path in the temp directory, unique per test name and process.
pub fn temp_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("transfer_fare_{}_{}.json", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}
