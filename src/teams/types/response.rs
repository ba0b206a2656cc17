#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team of users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Team {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Idea shares pooled for the team across bound markets.
    pub shared_quantity: Option<i64>,
    pub member_count: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A user's membership in a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct TeamMember {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub joined_at: Option<DateTime<Utc>>,
}

/// A team bound into a market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct TeamBinding {
    pub team_id: Option<String>,
    pub market_id: Option<String>,
    pub shared_quantity: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Outcome of an invite call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct InviteResult {
    #[serde(default)]
    pub invited: Vec<String>,
    /// Addresses that already belonged to the team and were skipped.
    pub already_members: Option<Vec<String>>,
}
