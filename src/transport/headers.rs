//! Per-request header composition.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret as _;

use crate::Result;
use crate::error::Error;

use super::Config;

/// Builds the header map for one outbound request.
///
/// Starts from a copy of the configured defaults and sets `Authorization`
/// from the authorizer's synchronous token accessor, overwriting any prior
/// value. The token is read immediately before every send and never cached
/// across requests, which is what makes the reauthorize-then-retry protocol
/// pick up a refreshed credential.
pub(crate) fn build(config: &Config) -> Result<HeaderMap> {
    let token = config.authorizer().token().ok_or_else(|| {
        Error::validation("authorizer holds no access token; authorize() first")
    })?;

    let mut headers = config.headers().clone();
    let mut value = HeaderValue::from_str(token.expose_secret())?;
    value.set_sensitive(true);
    headers.insert(AUTHORIZATION, value);

    Ok(headers)
}
