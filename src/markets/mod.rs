//! Quorum Markets service client and types.
//!
//! Decision markets are the platform's central object: every investible,
//! investment and stage lives inside one. Served from the `markets`
//! subdomain.
//!
//! ## Available endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/markets` | List markets visible to the caller |
//! | `/markets/{id}` | Get, update or delete a market |
//! | `/markets/{id}/stages` | List the market's stage configuration |
//! | `/markets/{id}/invest` | Place or adjust an investment |
//! | `/markets/{id}/investments` | List investments, filterable by user or investible |
//!
//! # Example
//!
//! ```no_run
//! use quorum_client_sdk::markets::types::request::MarketsRequest;
//! # use std::sync::Arc;
//! # use quorum_client_sdk::{Client, auth::StaticAuthorizer, transport::Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let authorizer = Arc::new(StaticAuthorizer::new("token"));
//! # let client = Client::new(Config::new("https://api.quorum.market", authorizer)?)?;
//! let request = MarketsRequest::builder().active(true).limit(10).build();
//!
//! for market in client.markets.list(&request).await? {
//!     println!("{}: {:?}", market.id, market.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Client;
