//! Quorum Teams service client and types.
//!
//! Teams group users so they can be invited to markets together and invest
//! from a shared idea-share pool. Served from the `teams` subdomain.

pub mod client;
pub mod types;

pub use client::Client;
