use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use shared::{ApiError, CostEntry, CostsBackend, CostsParams, CreateCostRequest};

use crate::services::config::DEFAULT_COSTS_ENDPOINT;

/// API client for the remote costs endpoint
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    costs_endpoint: String,
}

impl ApiClient {
    /// Create a new API client with the default endpoint
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_COSTS_ENDPOINT.to_string())
    }

    /// Create a new API client with a custom endpoint
    pub fn with_endpoint(costs_endpoint: String) -> Self {
        Self {
            costs_endpoint: costs_endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn costs_endpoint(&self) -> &str {
        &self.costs_endpoint
    }

    async fn error_for_status(response: Response) -> ApiError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        ApiError::Status { status, body }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl CostsBackend for ApiClient {
    async fn fetch_costs(&self, params: CostsParams) -> Result<Vec<CostEntry>, ApiError> {
        let response = Request::get(&self.costs_endpoint)
            .query(params.query_pairs())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::error_for_status(response).await);
        }

        response
            .json::<Vec<CostEntry>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_cost(&self, request: &CreateCostRequest) -> Result<(), ApiError> {
        let response = Request::post(&self.costs_endpoint)
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(Self::error_for_status(response).await)
        }
    }
}
