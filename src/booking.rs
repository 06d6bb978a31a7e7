use crate::booking_store::{BookingStore, BookingStoreError};
use crate::domain::{Booking, BookingStatus, Location, RideType};
use crate::estimator::EstimationEngine;
use crate::notifier::Notifier;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Clone, Debug)]
pub struct BookingRequest {
    pub user_id: String,
    pub user_name: String,
    pub user_phone: String,
    pub pickup: Location,
    pub dropoff: Location,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Quotes, stores and announces ride bookings.
#[derive(Debug)]
pub struct BookingService {
    engine: Arc<EstimationEngine>,
    store: BookingStore,
    notifier: Arc<dyn Notifier>,
}

impl BookingService {
    pub fn new(engine: Arc<EstimationEngine>, store: BookingStore, notifier: Arc<dyn Notifier>) -> Self {
        BookingService { engine, store, notifier }
    }

    #[instrument(skip_all, fields(pickup = request.pickup.address(), dropoff = request.dropoff.address()))]
    pub async fn book(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        let now = Utc::now();
        if let Some(scheduled_time) = request.scheduled_time.filter(|time| *time < now) {
            return Err(BookingError::ScheduledInThePast(scheduled_time));
        }

        let estimate = self.engine.estimate(&request.pickup, &request.dropoff).await.into_estimate();

        let booking = Booking {
            id: format!("TRIP-{}", rand::thread_rng().gen_range(0..10_000)),
            user_id: request.user_id,
            user_name: request.user_name,
            user_phone: request.user_phone,
            pickup: request.pickup,
            dropoff: request.dropoff,
            ride_type: if request.scheduled_time.is_some() { RideType::Scheduled } else { RideType::Instant },
            scheduled_time: request.scheduled_time,
            estimate,
            status: BookingStatus::Pending,
            notes: request.notes.filter(|notes| !notes.trim().is_empty()),
            created_at: now,
        };

        self.store.prepend(&booking).await?;
        info!(booking_id = booking.id.as_str(), fare = booking.estimate.fare(), "🚕 Booked ride");

        if let Err(e) = self.notifier.notify(&booking).await {
            warn!(booking_id = booking.id.as_str(), "⚠️ Unable to send the booking notification: {}", e);
        }

        Ok(booking)
    }

    pub async fn history(&self) -> Result<Vec<Booking>, BookingError> {
        Ok(self.store.load().await?)
    }
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("scheduled time {0} lies in the past")]
    ScheduledInThePast(DateTime<Utc>),
    #[error(transparent)]
    Store(#[from] BookingStoreError),
}
