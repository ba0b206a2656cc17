//! The HTTP transport core shared by every resource client.
//!
//! This is where the engineering weight of the SDK lives: URL construction
//! with subdomain rewriting ([`url`]), header composition with per-request
//! token injection ([`headers`]), response classification ([`response`]) and
//! the reauthorize-then-retry-once executor ([`Transport`]).
//!
//! Resource clients consume exactly four verbs: [`Transport::get`],
//! [`Transport::delete`], [`Transport::post`] and [`Transport::patch`].
//! Everything above this module is pure data shaping.

pub mod client;
pub mod config;
pub(crate) mod headers;
pub mod response;
pub mod url;

pub use client::Transport;
pub use config::{Config, DomainMunger};
pub use response::{NormalizedResponse, Payload};
pub use url::QueryParams;
