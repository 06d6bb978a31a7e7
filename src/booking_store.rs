use crate::domain::Booking;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Key the booking history is stored under.
pub const BOOKINGS_KEY: &str = "jamhuri_bookings";

/// Booking history, most recent first, kept under a fixed key of a JSON key-value file.
#[derive(Debug)]
pub struct BookingStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl BookingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        BookingStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Result<Vec<Booking>, BookingStoreError> {
        let _guard = self.lock.lock().await;
        let entries = self.read_entries().await?;
        bookings_from(&entries)
    }

    /// Stores `booking` in front of the existing history.
    #[instrument(skip_all, fields(path = %self.path.display(), booking_id = booking.id.as_str()))]
    pub async fn prepend(&self, booking: &Booking) -> Result<(), BookingStoreError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;

        let mut bookings = bookings_from(&entries)?;
        bookings.insert(0, booking.clone());
        entries.insert(BOOKINGS_KEY.to_string(), serde_json::to_value(&bookings)?);

        let staging = self.staging_path();
        fs::write(&staging, serde_json::to_vec_pretty(&entries)?).await?;
        fs::rename(&staging, &self.path).await?;
        debug!("💾 Stored booking, {} in history", bookings.len());
        Ok(())
    }

    /// Sibling file the next version is written to before it replaces the store.
    fn staging_path(&self) -> PathBuf {
        let mut file_name = self.path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    async fn read_entries(&self) -> Result<Map<String, Value>, BookingStoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(Map::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

fn bookings_from(entries: &Map<String, Value>) -> Result<Vec<Booking>, BookingStoreError> {
    match entries.get(BOOKINGS_KEY) {
        Some(value) => Ok(Vec::<Booking>::deserialize(value)?),
        None => Ok(Vec::new()),
    }
}

#[derive(Error, Debug)]
pub enum BookingStoreError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("corrupt booking storage: {0}")]
    Json(#[from] serde_json::Error),
}
