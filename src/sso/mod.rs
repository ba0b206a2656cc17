//! Quorum single-sign-on service client and types.
//!
//! Exchanges an externally-issued identity token (e.g. from the platform's
//! Cognito pool) for a platform access token and lists the markets an
//! identity may enter. Served from the `sso` subdomain.
//!
//! The identity-provider login flow itself is out of scope here; callers
//! obtain the identity token elsewhere and hand it in.

pub mod client;
pub mod types;

pub use client::Client;
