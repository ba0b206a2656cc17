use std::sync::Arc;

use super::types::request::{AvailableMarketsRequest, LoginRequest};
use super::types::response::{AvailableMarket, LoginResponse};
use crate::transport::Transport;
use crate::{Result, ToQueryParams as _};

pub(crate) const SUBDOMAIN: &str = "sso";

/// Client for the Quorum single-sign-on service.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Arc<Transport>,
}

impl Client {
    #[must_use]
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Exchanges an identity token for a platform access token.
    ///
    /// The returned token is what an [`crate::auth::Authorizer`]
    /// implementation stores and hands to the transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity token is rejected or the request
    /// fails.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let response = self
            .transport
            .post(SUBDOMAIN, "login", None, Some(request))
            .await?;
        response.json()
    }

    /// Lists the markets the given identity may enter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn available_markets(
        &self,
        request: &AvailableMarketsRequest,
    ) -> Result<Vec<AvailableMarket>> {
        let query = request.query_params();
        let response = self
            .transport
            .get(SUBDOMAIN, "markets", Some(&query))
            .await?;
        response.json()
    }
}
