//! Quorum Investibles service client and types.
//!
//! Investibles are the ideas users invest idea shares in. They move through
//! the stages configured on their market, carry labels, and accumulate
//! comment threads. Served from the `investibles` subdomain.

pub mod client;
pub mod types;

pub use client::Client;
