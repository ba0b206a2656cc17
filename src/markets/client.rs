use std::sync::Arc;

use super::types::request::{
    CreateMarketRequest, InvestRequest, InvestmentsRequest, MarketsRequest, UpdateMarketRequest,
};
use super::types::response::{Investment, Market, Stage};
use crate::transport::Transport;
use crate::{Result, ToQueryParams as _};

pub(crate) const SUBDOMAIN: &str = "markets";

/// Client for the Quorum Markets service.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Arc<Transport>,
}

impl Client {
    #[must_use]
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Lists markets visible to the caller, with optional filtering.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, request: &MarketsRequest) -> Result<Vec<Market>> {
        let query = request.query_params();
        let response = self
            .transport
            .get(SUBDOMAIN, "markets", Some(&query))
            .await?;
        response.json()
    }

    /// Retrieves a single market by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the market does not exist or the request fails.
    pub async fn market(&self, market_id: &str) -> Result<Market> {
        let response = self
            .transport
            .get(SUBDOMAIN, &format!("markets/{market_id}"), None)
            .await?;
        response.json()
    }

    /// Creates a new decision market owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(&self, request: &CreateMarketRequest) -> Result<Market> {
        let response = self
            .transport
            .post(SUBDOMAIN, "markets", None, Some(request))
            .await?;
        response.json()
    }

    /// Updates a market. Only fields present in the request change.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not the market owner or the
    /// request fails.
    pub async fn update(&self, market_id: &str, request: &UpdateMarketRequest) -> Result<Market> {
        let response = self
            .transport
            .patch(SUBDOMAIN, &format!("markets/{market_id}"), None, Some(request))
            .await?;
        response.json()
    }

    /// Deletes a market and everything in it.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not the market owner or the
    /// request fails.
    pub async fn delete(&self, market_id: &str) -> Result<()> {
        self.transport
            .delete(SUBDOMAIN, &format!("markets/{market_id}"), None)
            .await?;
        Ok(())
    }

    /// Lists the market's stage configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn stages(&self, market_id: &str) -> Result<Vec<Stage>> {
        let response = self
            .transport
            .get(SUBDOMAIN, &format!("markets/{market_id}/stages"), None)
            .await?;
        response.json()
    }

    /// Places or adjusts the caller's investment in an investible.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller lacks sufficient idea shares or the
    /// request fails.
    pub async fn invest(&self, market_id: &str, request: &InvestRequest) -> Result<Investment> {
        let response = self
            .transport
            .post(
                SUBDOMAIN,
                &format!("markets/{market_id}/invest"),
                None,
                Some(request),
            )
            .await?;
        response.json()
    }

    /// Lists investments in a market, filterable by user or investible.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn investments(
        &self,
        market_id: &str,
        request: &InvestmentsRequest,
    ) -> Result<Vec<Investment>> {
        let query = request.query_params();
        let response = self
            .transport
            .get(
                SUBDOMAIN,
                &format!("markets/{market_id}/investments"),
                Some(&query),
            )
            .await?;
        response.json()
    }
}
