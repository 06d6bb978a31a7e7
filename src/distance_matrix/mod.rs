mod client;
mod matrix_response;
mod provider;

pub use client::{DistanceMatrixClientError, new_client};
pub use provider::DistanceMatrixProvider;
