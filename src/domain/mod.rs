mod booking;
mod estimate;
mod geo_point;
mod location;

pub use booking::{Booking, BookingStatus, RideType};
pub use estimate::{Estimate, Pricing};
pub use geo_point::GeoPoint;
pub use location::Location;
