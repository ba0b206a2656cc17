#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Partial update of the calling user's profile. Absent fields are left
/// unchanged on the server.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateUserRequest {
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub email: Option<String>,
    pub email_notifications_enabled: Option<bool>,
    pub slack_notifications_enabled: Option<bool>,
}
