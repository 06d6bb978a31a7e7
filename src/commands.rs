use crate::app_config::AppConfig;
use crate::booking::{BookingError, BookingRequest, BookingService};
use crate::booking_store::BookingStore;
use crate::distance_matrix::{DistanceMatrixClientError, DistanceMatrixProvider, new_client};
use crate::domain::{Booking, Location};
use crate::estimator::EstimationEngine;
use crate::notifier::EmailSimulator;
use crate::places::PlaceCatalog;
use crate::stats::AdminStats;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("no known place matches '{0}'")]
    UnknownPlace(String),
    #[error(transparent)]
    DistanceMatrixClient(#[from] DistanceMatrixClientError),
    #[error(transparent)]
    Booking(#[from] BookingError),
}

pub fn build_engine(config: &AppConfig) -> Result<EstimationEngine, DistanceMatrixClientError> {
    let fallback = config.estimator().fallback();
    let Some(distance_matrix) = config.distance_matrix() else {
        info!("✅  No live route provider configured, estimating offline");
        return Ok(EstimationEngine::new(*config.pricing(), fallback));
    };

    let provider = DistanceMatrixProvider::new(new_client(distance_matrix)?, distance_matrix);
    info!("✅  Configured live route provider {}", distance_matrix.url());

    Ok(EstimationEngine::new(*config.pricing(), fallback)
        .with_provider_timeout(distance_matrix.timeout())
        .with_provider(Arc::new(provider)))
}

fn build_booking_service(config: &AppConfig) -> Result<BookingService, CommandError> {
    Ok(BookingService::new(
        Arc::new(build_engine(config)?),
        BookingStore::new(config.bookings().path()),
        Arc::new(EmailSimulator::new(config.notifications())),
    ))
}

fn resolve<'a>(catalog: &'a PlaceCatalog, query: &str) -> Result<&'a Location, CommandError> {
    catalog.resolve(query).ok_or_else(|| CommandError::UnknownPlace(query.to_string()))
}

pub async fn estimate(config: &AppConfig, pickup: &str, dropoff: &str) -> Result<(), CommandError> {
    let catalog = PlaceCatalog::from_config(config.places());
    let (pickup, dropoff) = (resolve(&catalog, pickup)?, resolve(&catalog, dropoff)?);

    let result = build_engine(config)?.estimate(pickup, dropoff).await;
    let estimate = result.estimate();

    println!("{} → {}", pickup.address(), dropoff.address());
    println!("Distance: {} km", estimate.distance_km());
    println!("Duration: {} mins", estimate.duration_min());
    println!(
        "Fare:     KES {} ({} per km, {} per min)",
        estimate.fare(),
        config.pricing().rate_per_km(),
        config.pricing().rate_per_min()
    );
    println!("Source:   {}", result.source());
    Ok(())
}

pub fn places(config: &AppConfig, query: &str) {
    let catalog = PlaceCatalog::from_config(config.places());
    for location in catalog.predictions(query) {
        println!("{} ({})", location.address(), location.coordinates());
    }
}

pub async fn book(
    config: &AppConfig,
    pickup: &str,
    dropoff: &str,
    name: String,
    phone: String,
    scheduled_time: Option<DateTime<Utc>>,
    notes: Option<String>,
) -> Result<(), CommandError> {
    let catalog = PlaceCatalog::from_config(config.places());
    let request = BookingRequest {
        user_id: format!("USER-{}", phone.trim_start_matches('+')),
        user_name: name,
        user_phone: phone,
        pickup: resolve(&catalog, pickup)?.clone(),
        dropoff: resolve(&catalog, dropoff)?.clone(),
        scheduled_time,
        notes,
    };

    let booking = build_booking_service(config)?.book(request).await?;
    println!("Booking {} confirmed, the admin has been notified", booking.id);
    print_booking(&booking);
    Ok(())
}

pub async fn history(config: &AppConfig) -> Result<(), CommandError> {
    let bookings = build_booking_service(config)?.history().await?;
    if bookings.is_empty() {
        println!("No trips yet");
    }

    for booking in &bookings {
        print_booking(booking);
    }
    Ok(())
}

pub async fn stats(config: &AppConfig) -> Result<(), CommandError> {
    let bookings = build_booking_service(config)?.history().await?;
    let stats = AdminStats::from_bookings(&bookings);

    println!("Revenue: KES {}", stats.revenue);
    println!("Trips:   {}", stats.trips);
    println!("Pending: {}", stats.pending);
    for booking in stats.recent {
        print_booking(booking);
    }
    Ok(())
}

fn print_booking(booking: &Booking) {
    let time = booking.scheduled_time.unwrap_or(booking.created_at);
    println!(
        "{:<10} {:<9} {:<10} {} {} → {}, KES {}",
        booking.id,
        booking.status,
        booking.ride_type,
        time.format("%b %d, %Y %H:%M"),
        booking.pickup.address(),
        booking.dropoff.address(),
        booking.estimate.fare()
    );
}
