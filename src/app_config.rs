use crate::domain::{Location, Pricing};
use crate::estimator::{DemoTrip, FallbackEstimator};
use config::Config;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pricing: Pricing,
    estimator: Estimator,
    distance_matrix: Option<DistanceMatrix>,
    places: Places,
    bookings: Bookings,
    notifications: Notifications,
}

impl AppConfig {
    /// Loads `name` (without extension), an optional `config_local` override and `TRANSFER_*` environment variables.
    pub fn load(name: &str) -> Result<Self, AppConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name(name).required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("TRANSFER").prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize::<AppConfig>()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppConfigError> {
        if !(self.estimator.average_speed_kmh > 0.0) {
            return Err(AppConfigError::Invalid(format!(
                "estimator.average_speed_kmh must be positive, got {}",
                self.estimator.average_speed_kmh
            )));
        }

        let demo_trip = self.estimator.demo_trip;
        if !(demo_trip.distance_km > 0.0) || demo_trip.duration_min == 0 {
            return Err(AppConfigError::Invalid(format!("estimator.demo_trip must not be zero, got {:?}", demo_trip)));
        }

        Ok(())
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    /// The live distance matrix settings, if configured with an API key.
    pub fn distance_matrix(&self) -> Option<&DistanceMatrix> {
        self.distance_matrix.as_ref().filter(|distance_matrix| !distance_matrix.api_key.trim().is_empty())
    }

    pub fn places(&self) -> &Places {
        &self.places
    }

    pub fn bookings(&self) -> &Bookings {
        &self.bookings
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
pub struct Estimator {
    average_speed_kmh: f64,
    buffer_min: u32,
    demo_trip: DemoTrip,
}

impl Estimator {
    pub fn fallback(&self) -> FallbackEstimator {
        FallbackEstimator::new(self.average_speed_kmh, self.buffer_min, self.demo_trip)
    }
}

#[derive(Debug, Deserialize)]
pub struct DistanceMatrix {
    url: String,
    api_key: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl DistanceMatrix {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Places {
    min_query_len: usize,
    locations: Vec<Location>,
}

impl Places {
    pub fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
}

#[derive(Debug, Deserialize)]
pub struct Bookings {
    path: PathBuf,
}

impl Bookings {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Deserialize)]
pub struct Notifications {
    app_name: String,
    subject: String,
    admin_emails: Vec<String>,
    #[serde(with = "humantime_serde")]
    delay: Duration,
}

impl Notifications {
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn admin_emails(&self) -> &[String] {
        &self.admin_emails
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                pricing: Pricing::default(),
                estimator: Estimator {
                    average_speed_kmh: 40.0,
                    buffer_min: 10,
                    demo_trip: DemoTrip::default(),
                },
                distance_matrix: None,
                places: Places {
                    min_query_len: 3,
                    locations: Vec::new(),
                },
                bookings: Bookings {
                    path: std::env::temp_dir().join("transfer_fare_bookings.json"),
                },
                notifications: Notifications {
                    app_name: "Jamhuri Transfers".to_string(),
                    subject: "New Booking Alert - Jamhuri Transfers".to_string(),
                    admin_emails: vec!["dispatch@example.com".to_string()],
                    delay: Duration::ZERO,
                },
            },
        }
    }

    pub fn distance_matrix_url(mut self, url: String) -> Self {
        self.config.distance_matrix = Some(DistanceMatrix {
            url,
            api_key: "key".to_string(),
            timeout: Duration::from_secs(3),
        });
        self
    }

    pub fn locations(mut self, locations: Vec<Location>) -> Self {
        self.config.places.locations = locations;
        self
    }

    pub fn bookings_path(mut self, path: PathBuf) -> Self {
        self.config.bookings.path = path;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
