use crate::app_config::Notifications;
use crate::domain::Booking;
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument};

#[async_trait]
pub trait Notifier: Debug + Send + Sync {
    async fn notify(&self, booking: &Booking) -> Result<(), NotifyError>;
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("no recipients configured for booking notifications")]
    NoRecipients,
}

/// Writes the booking alert e-mail to the log instead of sending it.
#[derive(Debug)]
pub struct EmailSimulator {
    app_name: String,
    subject: String,
    recipients: Vec<String>,
    delay: Duration,
}

impl EmailSimulator {
    pub fn new(config: &Notifications) -> Self {
        EmailSimulator {
            app_name: config.app_name().to_string(),
            subject: config.subject().to_string(),
            recipients: config.admin_emails().to_vec(),
            delay: config.delay(),
        }
    }

    pub fn render(&self, booking: &Booking) -> String {
        let scheduled_time = booking.scheduled_time.map(|time| time.to_rfc3339()).unwrap_or_else(|| "ASAP".to_string());

        format!(
            "NEW RIDE BOOKING ALERT - {app}\n\
             Booking ID: {id}\n\
             Type: {ride_type}\n\
             Status: {status}\n\
             \n\
             CLIENT DETAILS:\n\
             Name: {name}\n\
             Phone: {phone}\n\
             \n\
             TRIP DETAILS:\n\
             Pickup: {pickup}\n\
             Dropoff: {dropoff}\n\
             Scheduled Time: {scheduled_time}\n\
             \n\
             ESTIMATES:\n\
             Distance: {distance} km\n\
             Duration: {duration} mins\n\
             Estimated Fare: KES {fare}\n\
             \n\
             Notes: {notes}",
            app = self.app_name.to_uppercase(),
            id = booking.id,
            ride_type = booking.ride_type,
            status = booking.status,
            name = booking.user_name,
            phone = booking.user_phone,
            pickup = booking.pickup.address(),
            dropoff = booking.dropoff.address(),
            distance = booking.estimate.distance_km(),
            duration = booking.estimate.duration_min(),
            fare = booking.estimate.fare(),
            notes = booking.notes.as_deref().unwrap_or("None"),
        )
    }
}

#[async_trait]
impl Notifier for EmailSimulator {
    #[instrument(skip_all, fields(booking_id = booking.id.as_str()))]
    async fn notify(&self, booking: &Booking) -> Result<(), NotifyError> {
        if self.recipients.is_empty() {
            return Err(NotifyError::NoRecipients);
        }

        info!("📧 Sending booking e-mail...");
        info!(to = %self.recipients.join(", "), subject = self.subject.as_str(), "📧 {}", self.render(booking));
        tokio::time::sleep(self.delay).await;
        info!("📧 Sending booking e-mail... OK");

        Ok(())
    }
}
