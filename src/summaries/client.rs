use std::sync::Arc;

use super::types::request::VersionsRequest;
use super::types::response::{MarketSummary, VersionsResponse};
use crate::transport::Transport;
use crate::{Result, ToQueryParams as _};

pub(crate) const SUBDOMAIN: &str = "summaries";

/// Client for the Quorum Summaries service.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Arc<Transport>,
}

impl Client {
    #[must_use]
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Retrieves the version vector, optionally narrowed to specific
    /// markets. Clients poll this to decide what to refetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn versions(&self, request: &VersionsRequest) -> Result<VersionsResponse> {
        let query = request.query_params();
        let response = self
            .transport
            .get(SUBDOMAIN, "versions", Some(&query))
            .await?;
        response.json()
    }

    /// Retrieves the aggregated view of one market.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn market_summary(&self, market_id: &str) -> Result<MarketSummary> {
        let response = self
            .transport
            .get(SUBDOMAIN, &format!("markets/{market_id}"), None)
            .await?;
        response.json()
    }
}
