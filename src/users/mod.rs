//! Quorum Users service client and types.
//!
//! Account-level operations: the calling user's profile, other users in
//! shared markets, idea-share grants and pokes. Served from the `users`
//! subdomain of the platform.

pub mod client;
pub mod types;

pub use client::Client;
