#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Creates a new team owned by the caller.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateTeamRequest {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub description: Option<String>,
}

/// Invites users to a team by email address.
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct InviteRequest {
    pub email_list: Vec<String>,
}
