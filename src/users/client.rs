use std::sync::Arc;

use serde_json::json;

use super::types::request::UpdateUserRequest;
use super::types::response::{Grant, Poke, User};
use crate::Result;
use crate::transport::Transport;

pub(crate) const SUBDOMAIN: &str = "users";

/// Client for the Quorum Users service.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Arc<Transport>,
}

impl Client {
    #[must_use]
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Retrieves the calling user's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn current(&self) -> Result<User> {
        let response = self.transport.get(SUBDOMAIN, "users/current", None).await?;
        response.json()
    }

    /// Retrieves a user by id. The caller must share at least one market
    /// with the requested user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not visible or the request fails.
    pub async fn user(&self, user_id: &str) -> Result<User> {
        let response = self
            .transport
            .get(SUBDOMAIN, &format!("users/{user_id}"), None)
            .await?;
        response.json()
    }

    /// Updates the calling user's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update(&self, request: &UpdateUserRequest) -> Result<User> {
        let response = self
            .transport
            .patch(SUBDOMAIN, "users/current", None, Some(request))
            .await?;
        response.json()
    }

    /// Grants idea shares to a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller lacks grant rights or the request
    /// fails.
    pub async fn grant(&self, user_id: &str, quantity: i64) -> Result<Grant> {
        let body = json!({ "quantity": quantity });
        let response = self
            .transport
            .post(SUBDOMAIN, &format!("users/{user_id}/grant"), None, Some(&body))
            .await?;
        response.json()
    }

    /// Sends a poke notification to a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn poke(&self, user_id: &str, text: &str) -> Result<Poke> {
        let body = json!({ "text": text });
        let response = self
            .transport
            .post(SUBDOMAIN, &format!("users/{user_id}/poke"), None, Some(&body))
            .await?;
        response.json()
    }
}
