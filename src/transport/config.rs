use std::fmt;
use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::Result;
use crate::auth::Authorizer;

/// Rewrites a fully built request URL for a service subdomain.
///
/// The default behavior (no munger configured) prepends `subdomain.` to the
/// host of the base URL. Deployments that terminate all services on a single
/// host, and tests pointed at a mock server, install their own munger.
pub type DomainMunger = Arc<dyn Fn(Url, &str) -> Result<Url> + Send + Sync>;

const DEFAULT_CONTENT_TYPE: &str = "application/json;charset=UTF-8";
const DEFAULT_ACCEPT: &str = "application/json, text/plain, */*";

/// Immutable configuration for a [`super::Transport`].
///
/// Header defaults are merged at construction time; values supplied through
/// [`Config::with_header`] or [`Config::with_headers`] win on key collision.
/// Once a transport is built around it, nothing here changes for the lifetime
/// of the client.
#[derive(Clone)]
pub struct Config {
    base_url: Url,
    headers: HeaderMap,
    authorizer: Arc<dyn Authorizer>,
    domain_munger: Option<DomainMunger>,
}

impl Config {
    /// Creates a configuration for the given base URL and authorizer, with
    /// the built-in default headers.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str, authorizer: Arc<dyn Authorizer>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));

        Ok(Self {
            base_url: Url::parse(base_url)?,
            headers,
            authorizer,
            domain_munger: None,
        })
    }

    /// Sets a single default header, overwriting the built-in value for the
    /// same name.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a valid header value.
    pub fn with_header(mut self, name: HeaderName, value: &str) -> Result<Self> {
        self.headers.insert(name, HeaderValue::from_str(value)?);
        Ok(self)
    }

    /// Merges a header map over the current defaults; supplied values win.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        for (name, value) in &headers {
            self.headers.insert(name, value.clone());
        }
        self
    }

    /// Replaces the default subdomain-prepending behavior with a custom
    /// rewriting function.
    #[must_use]
    pub fn with_domain_munger<F>(mut self, munger: F) -> Self
    where
        F: Fn(Url, &str) -> Result<Url> + Send + Sync + 'static,
    {
        self.domain_munger = Some(Arc::new(munger));
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn authorizer(&self) -> &Arc<dyn Authorizer> {
        &self.authorizer
    }

    pub(crate) fn domain_munger(&self) -> Option<&DomainMunger> {
        self.domain_munger.as_ref()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers)
            .field("domain_munger", &self.domain_munger.is_some())
            .finish_non_exhaustive()
    }
}
