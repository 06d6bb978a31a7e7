use crate::app_config::DistanceMatrix;
use crate::distance_matrix::matrix_response::MatrixResponse;
use crate::domain::GeoPoint;
use crate::estimator::{ProviderError, RouteMeasurement, RouteProvider};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

const OK: &str = "OK";

/// Driving distance and duration from a Google Distance Matrix compatible API.
#[derive(Debug)]
pub struct DistanceMatrixProvider {
    client: Client,
    url: String,
}

impl DistanceMatrixProvider {
    pub fn new(client: Client, config: &DistanceMatrix) -> Self {
        DistanceMatrixProvider {
            client,
            url: config.url().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RouteProvider for DistanceMatrixProvider {
    fn name(&self) -> &'static str {
        "distance_matrix"
    }

    #[instrument(skip(self))]
    async fn measure(&self, origin: GeoPoint, destination: GeoPoint) -> Result<RouteMeasurement, ProviderError> {
        let response = self
            .client
            .get(format!("{}/maps/api/distancematrix/json", self.url))
            .query(&[
                ("origins", origin.to_string()),
                ("destinations", destination.to_string()),
                ("mode", "driving".to_string()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let matrix = response.json::<MatrixResponse>().await?;
        debug!(status = matrix.status.as_str(), "Received distance matrix");
        to_measurement(matrix)
    }
}

fn to_measurement(matrix: MatrixResponse) -> Result<RouteMeasurement, ProviderError> {
    if matrix.status != OK {
        let status = match matrix.error_message {
            Some(message) => format!("{}: {}", matrix.status, message),
            None => matrix.status,
        };
        return Err(ProviderError::NotOk(status));
    }

    let element = matrix
        .rows
        .into_iter()
        .next()
        .and_then(|row| row.elements.into_iter().next())
        .ok_or_else(|| ProviderError::Malformed("missing row or element".to_string()))?;

    if element.status != OK {
        return Err(ProviderError::NotOk(element.status));
    }

    match (element.distance, element.duration) {
        (Some(distance), Some(duration)) => Ok(RouteMeasurement::new(distance.value, duration.value)),
        _ => Err(ProviderError::Malformed("element without distance or duration".to_string())),
    }
}
