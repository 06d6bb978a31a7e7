use crate::domain::{GeoPoint, Location, Pricing};
use crate::estimator::fallback::FallbackEstimator;
use crate::estimator::provider::{ProviderError, RouteMeasurement, RouteProvider};
use crate::estimator::{EstimateSource, SourcedEstimate};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(3);

/// Quotes trips from the first route provider that answers, or from the straight-line fallback.
#[derive(Debug)]
pub struct EstimationEngine {
    pricing: Pricing,
    providers: Vec<Arc<dyn RouteProvider>>,
    provider_timeout: Duration,
    fallback: FallbackEstimator,
}

impl EstimationEngine {
    pub fn new(pricing: Pricing, fallback: FallbackEstimator) -> Self {
        EstimationEngine {
            pricing,
            providers: Vec::new(),
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            fallback,
        }
    }

    /// Limits how long each provider may take before the next one is asked.
    pub fn with_provider_timeout(mut self, provider_timeout: Duration) -> Self {
        self.provider_timeout = provider_timeout;
        self
    }

    /// Appends a provider to the chain, providers are asked in the order they were added.
    pub fn with_provider(mut self, provider: Arc<dyn RouteProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    #[instrument(skip_all, fields(pickup = pickup.address(), dropoff = dropoff.address()))]
    pub async fn estimate(&self, pickup: &Location, dropoff: &Location) -> SourcedEstimate {
        if self.providers.is_empty() {
            debug!("🧭 No route provider available, using the fallback estimate");
        }

        for provider in &self.providers {
            debug!("🧭 Measuring route with '{}'...", provider.name());
            match self.measure(provider.as_ref(), pickup.coordinates(), dropoff.coordinates()).await {
                Ok(measurement) => {
                    let estimate = self.pricing.estimate(measurement.distance_km(), measurement.duration_min());
                    info!(?estimate, "🧭 Measuring route with '{}'... OK", provider.name());
                    return SourcedEstimate::new(estimate, EstimateSource::Live(provider.name()));
                }
                Err(e) => warn!("⚠️ Measuring route with '{}'... failed, {}", provider.name(), e),
            }
        }

        let result = self.fallback.estimate(pickup.coordinates(), dropoff.coordinates(), &self.pricing);
        info!(estimate = ?result.estimate(), source = %result.source(), "🧮 Estimated route without a provider");
        result
    }

    async fn measure(&self, provider: &dyn RouteProvider, origin: GeoPoint, destination: GeoPoint) -> Result<RouteMeasurement, ProviderError> {
        timeout(self.provider_timeout, provider.measure(origin, destination))
            .await
            .map_err(|_| ProviderError::Timeout(self.provider_timeout))?
    }
}
