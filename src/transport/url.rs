//! Request URL construction: base joining, subdomain rewriting, query
//! parameters.

use std::collections::BTreeMap;

use url::Url;

use crate::Result;
use crate::error::Error;

use super::Config;

/// Query parameters with set semantics: one value per key, last write wins.
/// Duplicate keys cannot survive map construction, so serialization order is
/// irrelevant.
pub type QueryParams = BTreeMap<String, String>;

/// Builds the full request URL for one call.
///
/// The base is `base_url + '/' + path`. When a domain munger is configured it
/// is applied to the joined URL and replaces the default behavior entirely;
/// otherwise a non-empty `subdomain` is prepended to the host. An empty or
/// absent query map leaves the query string absent.
pub(crate) fn build(
    config: &Config,
    subdomain: &str,
    path: &str,
    query: Option<&QueryParams>,
) -> Result<Url> {
    let base = config.base_url().as_str().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let mut url = Url::parse(&format!("{base}/{path}"))?;

    url = match config.domain_munger() {
        Some(munge) => munge(url, subdomain)?,
        None => {
            if !subdomain.is_empty() {
                prepend_subdomain(&mut url, subdomain)?;
            }
            url
        }
    };

    if let Some(params) = query.filter(|params| !params.is_empty()) {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
        drop(pairs);
    }

    Ok(url)
}

fn prepend_subdomain(url: &mut Url, subdomain: &str) -> Result<()> {
    let host = url
        .host_str()
        .ok_or_else(|| Error::validation("base URL has no host to prepend a subdomain to"))?
        .to_owned();
    url.set_host(Some(&format!("{subdomain}.{host}")))?;
    Ok(())
}
