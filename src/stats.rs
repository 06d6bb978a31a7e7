use crate::domain::{Booking, BookingStatus};

const RECENT_BOOKINGS: usize = 5;

/// Aggregates shown on the admin dashboard.
#[derive(Debug, PartialEq)]
pub struct AdminStats<'a> {
    pub revenue: u64,
    pub trips: usize,
    pub pending: usize,
    pub recent: &'a [Booking],
}

impl<'a> AdminStats<'a> {
    /// `bookings` are expected most recent first.
    pub fn from_bookings(bookings: &'a [Booking]) -> Self {
        AdminStats {
            revenue: bookings.iter().map(|booking| booking.estimate.fare()).sum(),
            trips: bookings.len(),
            pending: bookings.iter().filter(|booking| booking.status == BookingStatus::Pending).count(),
            recent: &bookings[..bookings.len().min(RECENT_BOOKINGS)],
        }
    }
}
