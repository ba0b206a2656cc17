use std::sync::Arc;

use serde_json::json;

use super::types::request::{
    CreateCommentRequest, CreateInvestibleRequest, InvestiblesRequest, StageChangeRequest,
    UpdateInvestibleRequest,
};
use super::types::response::{Comment, FollowState, Investible};
use crate::transport::Transport;
use crate::{Result, ToQueryParams as _};

pub(crate) const SUBDOMAIN: &str = "investibles";

/// Client for the Quorum Investibles service.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Arc<Transport>,
}

impl Client {
    #[must_use]
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Lists investibles, with optional filtering by market, stage or
    /// search term.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, request: &InvestiblesRequest) -> Result<Vec<Investible>> {
        let query = request.query_params();
        let response = self
            .transport
            .get(SUBDOMAIN, "investibles", Some(&query))
            .await?;
        response.json()
    }

    /// Retrieves a single investible by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the investible does not exist or the request
    /// fails.
    pub async fn investible(&self, investible_id: &str) -> Result<Investible> {
        let response = self
            .transport
            .get(SUBDOMAIN, &format!("investibles/{investible_id}"), None)
            .await?;
        response.json()
    }

    /// Creates a new investible.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(&self, request: &CreateInvestibleRequest) -> Result<Investible> {
        let response = self
            .transport
            .post(SUBDOMAIN, "investibles", None, Some(request))
            .await?;
        response.json()
    }

    /// Updates an investible. Only fields present in the request change.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update(
        &self,
        investible_id: &str,
        request: &UpdateInvestibleRequest,
    ) -> Result<Investible> {
        let response = self
            .transport
            .patch(
                SUBDOMAIN,
                &format!("investibles/{investible_id}"),
                None,
                Some(request),
            )
            .await?;
        response.json()
    }

    /// Deletes an investible and its comments.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, investible_id: &str) -> Result<()> {
        self.transport
            .delete(SUBDOMAIN, &format!("investibles/{investible_id}"), None)
            .await?;
        Ok(())
    }

    /// Follows or unfollows an investible for the calling user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn follow(&self, investible_id: &str, remove: bool) -> Result<FollowState> {
        let body = json!({ "remove": remove });
        let response = self
            .transport
            .patch(
                SUBDOMAIN,
                &format!("investibles/{investible_id}/follow"),
                None,
                Some(&body),
            )
            .await?;
        response.json()
    }

    /// Lists the comment thread of an investible.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn comments(&self, investible_id: &str) -> Result<Vec<Comment>> {
        let response = self
            .transport
            .get(
                SUBDOMAIN,
                &format!("investibles/{investible_id}/comments"),
                None,
            )
            .await?;
        response.json()
    }

    /// Adds a comment to an investible.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn comment(
        &self,
        investible_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<Comment> {
        let response = self
            .transport
            .post(
                SUBDOMAIN,
                &format!("investibles/{investible_id}/comments"),
                None,
                Some(request),
            )
            .await?;
        response.json()
    }

    /// Moves an investible to another stage of its market.
    ///
    /// # Errors
    ///
    /// Returns an error if the stage transition is not allowed or the
    /// request fails.
    pub async fn move_to_stage(
        &self,
        investible_id: &str,
        request: &StageChangeRequest,
    ) -> Result<Investible> {
        let response = self
            .transport
            .patch(
                SUBDOMAIN,
                &format!("investibles/{investible_id}/stage"),
                None,
                Some(request),
            )
            .await?;
        response.json()
    }
}
