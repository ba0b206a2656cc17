#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests"
)]
#![allow(
    unused,
    reason = "Each integration test binary uses a different subset of these helpers"
)]

use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use httpmock::MockServer;
use quorum_client_sdk::auth::{Authorizer, SecretString};
use quorum_client_sdk::transport::{Config, Transport};
use quorum_client_sdk::{Client, Result};

pub const TOKEN: &str = "token-1";
pub const STALE_TOKEN: &str = "stale-token";
pub const FRESH_TOKEN: &str = "fresh-token";

/// Test authorizer with observable reauthorization behavior: `reauthorize`
/// swaps in the rotation token (when one is set) and counts its calls, and
/// `token` reflects whatever is current, mirroring the shared-storage
/// contract real authorizers must honor.
pub struct StubAuthorizer {
    current: RwLock<SecretString>,
    rotate_to: Option<SecretString>,
    reauthorize_calls: AtomicUsize,
}

impl StubAuthorizer {
    pub fn fixed(token: &str) -> Arc<Self> {
        Arc::new(Self {
            current: RwLock::new(SecretString::from(token.to_owned())),
            rotate_to: None,
            reauthorize_calls: AtomicUsize::new(0),
        })
    }

    pub fn rotating(initial: &str, refreshed: &str) -> Arc<Self> {
        Arc::new(Self {
            current: RwLock::new(SecretString::from(initial.to_owned())),
            rotate_to: Some(SecretString::from(refreshed.to_owned())),
            reauthorize_calls: AtomicUsize::new(0),
        })
    }

    pub fn reauthorize_calls(&self) -> usize {
        self.reauthorize_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Authorizer for StubAuthorizer {
    async fn authorize(&self) -> Result<SecretString> {
        Ok(self.current.read().unwrap().clone())
    }

    async fn reauthorize(&self) -> Result<SecretString> {
        self.reauthorize_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(next) = &self.rotate_to {
            *self.current.write().unwrap() = next.clone();
        }
        Ok(self.current.read().unwrap().clone())
    }

    fn token(&self) -> Option<SecretString> {
        Some(self.current.read().unwrap().clone())
    }
}

/// Configuration pointed at the mock server. The identity munger keeps the
/// mock server's host intact; subdomain rewriting has its own unit tests.
pub fn config(server: &MockServer, authorizer: Arc<impl Authorizer + 'static>) -> Config {
    Config::new(&server.base_url(), authorizer)
        .unwrap()
        .with_domain_munger(|url, _| Ok(url))
}

pub fn transport(server: &MockServer, authorizer: Arc<impl Authorizer + 'static>) -> Transport {
    Transport::new(config(server, authorizer)).unwrap()
}

pub fn client(server: &MockServer) -> Client {
    Client::new(config(server, StubAuthorizer::fixed(TOKEN))).unwrap()
}
