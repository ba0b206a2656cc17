//! The credential capability consumed by the transport layer.
//!
//! The SDK never talks to an identity provider itself. It is handed an
//! [`Authorizer`] at construction and calls exactly three things on it: the
//! asynchronous [`Authorizer::authorize`] and [`Authorizer::reauthorize`]
//! acquisition methods, and the synchronous [`Authorizer::token`] accessor
//! that every outbound request reads its `Authorization` header from.

use async_trait::async_trait;
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};

use crate::Result;

/// Supplies and refreshes the bearer credential for platform calls.
///
/// The authorizer exclusively owns its token storage; the transport never
/// writes to it. The contract the transport relies on:
///
/// * [`Authorizer::token`] is a pure accessor: no I/O, no blocking, no side
///   effects. It returns whatever credential is current at the instant of
///   the call.
/// * [`Authorizer::reauthorize`] must make the refreshed credential visible
///   to [`Authorizer::token`] before its future resolves. The transport
///   re-derives headers through the accessor when it retries a rejected
///   request, and never injects the returned token directly.
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Performs the initial credential acquisition, e.g. an OIDC login.
    async fn authorize(&self) -> Result<SecretString>;

    /// Refreshes the credential after the platform has rejected it.
    async fn reauthorize(&self) -> Result<SecretString>;

    /// Returns the currently-held token, if any.
    fn token(&self) -> Option<SecretString>;
}

/// [`Authorizer`] holding a fixed, externally-issued token.
///
/// Useful when token lifecycle is managed outside the SDK, e.g. a service
/// account credential injected by the environment. `reauthorize` hands back
/// the same token; a request rejected once will therefore fail on its retry
/// and surface as a status error.
#[derive(Clone)]
pub struct StaticAuthorizer {
    token: SecretString,
}

impl StaticAuthorizer {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }
}

impl std::fmt::Debug for StaticAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticAuthorizer").finish_non_exhaustive()
    }
}

#[async_trait]
impl Authorizer for StaticAuthorizer {
    async fn authorize(&self) -> Result<SecretString> {
        Ok(self.token.clone())
    }

    async fn reauthorize(&self) -> Result<SecretString> {
        Ok(self.token.clone())
    }

    fn token(&self) -> Option<SecretString> {
        Some(self.token.clone())
    }
}
