use async_trait::async_trait;

use crate::ledger::validate_new_cost;
use crate::{AddCostError, ApiError, CostEntry, CostsParams, CreateCostRequest, FetchTicket};

/// Remote store of cost entries.
///
/// `?Send` because the browser implementation holds JS handles.
#[async_trait(?Send)]
pub trait CostsBackend {
    /// `GET <endpoint>?month=..&year=..`
    async fn fetch_costs(&self, params: CostsParams) -> Result<Vec<CostEntry>, ApiError>;

    /// `POST <endpoint>` with the new entry
    async fn create_cost(&self, request: &CreateCostRequest) -> Result<(), ApiError>;
}

/// Read/write operations of the costs screen over a [`CostsBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct CostsService<B> {
    backend: B,
}

impl<B: CostsBackend> CostsService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// One read attempt for `ticket`. No retry; the caller decides how a
    /// failure is displayed.
    pub async fn fetch(&self, ticket: FetchTicket) -> Result<Vec<CostEntry>, ApiError> {
        log::debug!("Fetching costs #{} for {}", ticket.seq, ticket.params);
        let result = self.backend.fetch_costs(ticket.params).await;
        match &result {
            Ok(entries) => log::info!(
                "Loaded {} cost entries for {}",
                entries.len(),
                ticket.params
            ),
            Err(e) => log::warn!("Costs fetch #{} failed: {}", ticket.seq, e),
        }
        result
    }

    /// Validate the form input, then write it. Nothing is sent when
    /// validation fails.
    pub async fn submit(
        &self,
        params: CostsParams,
        item: &str,
        cost: &str,
    ) -> Result<CreateCostRequest, AddCostError> {
        let request = validate_new_cost(item, cost, params).map_err(|e| {
            log::info!("Rejected new cost for {}: {}", params, e);
            e
        })?;

        self.backend.create_cost(&request).await.map_err(|e| {
            log::error!("Error adding cost '{}': {}", request.item, e);
            AddCostError::from(e)
        })?;

        log::info!("Added cost '{}' ({}) for {}", request.item, request.cost, params);
        Ok(request)
    }
}
