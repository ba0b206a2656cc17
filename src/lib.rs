#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod error;
pub mod investibles;
pub mod markets;
pub mod sso;
pub mod summaries;
pub mod teams;
pub mod transport;
pub mod users;

use std::sync::Arc;

use serde::Serialize;

use crate::error::Error;
use crate::transport::{Config, QueryParams, Transport};

pub type Result<T> = std::result::Result<T, Error>;

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement
/// [`Serialize`]. It uses [`serde_html_form`] to serialize the struct fields
/// and collects the pairs into the set-semantics [`QueryParams`] map the URL
/// builder consumes, so each key appears at most once with its last-written
/// value.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a query-parameter map.
    ///
    /// Returns an empty map when no parameters are set; the URL builder
    /// leaves the query string absent in that case.
    fn query_params(&self) -> QueryParams {
        let encoded = serde_html_form::to_string(self)
            .inspect_err(|e| {
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
            })
            .unwrap_or_default();

        url::form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect()
    }
}

impl<T: Serialize> ToQueryParams for T {}

/// Composition surface of the SDK: one shared [`Transport`] and a client
/// per platform service.
///
/// ```no_run
/// use std::sync::Arc;
///
/// use quorum_client_sdk::Client;
/// use quorum_client_sdk::auth::StaticAuthorizer;
/// use quorum_client_sdk::transport::Config;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let authorizer = Arc::new(StaticAuthorizer::new("pre-issued-token"));
/// let config = Config::new("https://api.quorum.market", authorizer)?;
/// let client = Client::new(config)?;
///
/// let user = client.users.current().await?;
/// println!("{}", user.id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    transport: Arc<Transport>,
    pub users: users::Client,
    pub markets: markets::Client,
    pub investibles: investibles::Client,
    pub teams: teams::Client,
    pub sso: sso::Client,
    pub summaries: summaries::Client,
}

impl Client {
    /// Builds the full client set over one transport. Performs no network
    /// I/O; the first request happens when a resource method is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        let transport = Arc::new(Transport::new(config)?);

        Ok(Self {
            users: users::Client::new(Arc::clone(&transport)),
            markets: markets::Client::new(Arc::clone(&transport)),
            investibles: investibles::Client::new(Arc::clone(&transport)),
            teams: teams::Client::new(Arc::clone(&transport)),
            sso: sso::Client::new(Arc::clone(&transport)),
            summaries: summaries::Client::new(Arc::clone(&transport)),
            transport,
        })
    }

    /// The shared transport, for callers composing their own resource
    /// wrappers.
    #[must_use]
    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }
}
