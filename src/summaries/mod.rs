//! Quorum Summaries service client and types.
//!
//! Read-only aggregates: the version vector clients poll to detect change,
//! and per-market rollups. Served from the `summaries` subdomain.

pub mod client;
pub mod types;

pub use client::Client;
