use std::sync::Arc;

use super::types::request::{CreateTeamRequest, InviteRequest};
use super::types::response::{InviteResult, Team, TeamBinding, TeamMember};
use crate::Result;
use crate::transport::Transport;

pub(crate) const SUBDOMAIN: &str = "teams";

/// Client for the Quorum Teams service.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Arc<Transport>,
}

impl Client {
    #[must_use]
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Lists the teams the calling user belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn mine(&self) -> Result<Vec<Team>> {
        let response = self.transport.get(SUBDOMAIN, "teams/mine", None).await?;
        response.json()
    }

    /// Retrieves a single team by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the team is not visible or the request fails.
    pub async fn team(&self, team_id: &str) -> Result<Team> {
        let response = self
            .transport
            .get(SUBDOMAIN, &format!("teams/{team_id}"), None)
            .await?;
        response.json()
    }

    /// Creates a new team owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(&self, request: &CreateTeamRequest) -> Result<Team> {
        let response = self
            .transport
            .post(SUBDOMAIN, "teams", None, Some(request))
            .await?;
        response.json()
    }

    /// Lists the members of a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn members(&self, team_id: &str) -> Result<Vec<TeamMember>> {
        let response = self
            .transport
            .get(SUBDOMAIN, &format!("teams/{team_id}/members"), None)
            .await?;
        response.json()
    }

    /// Invites users to a team by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not a team admin or the request
    /// fails.
    pub async fn invite(&self, team_id: &str, request: &InviteRequest) -> Result<InviteResult> {
        let response = self
            .transport
            .post(
                SUBDOMAIN,
                &format!("teams/{team_id}/invite"),
                None,
                Some(request),
            )
            .await?;
        response.json()
    }

    /// Binds a team into a market, giving all members access.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not a team admin or the request
    /// fails.
    pub async fn bind(&self, team_id: &str, market_id: &str) -> Result<TeamBinding> {
        let response = self
            .transport
            .post(
                SUBDOMAIN,
                &format!("teams/{team_id}/bind/{market_id}"),
                None,
                None::<&()>,
            )
            .await?;
        response.json()
    }
}
