//! The transport client and its reauthorizing request executor.

use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use url::Url;

use crate::Result;

use super::response::{self, NormalizedResponse};
use super::url::QueryParams;
use super::{Config, headers};

/// Everything needed to issue (and re-issue) one request. Built fresh per
/// call; headers are deliberately absent because they are re-derived from
/// the authorizer on every send.
#[derive(Debug, Clone)]
struct RequestParts {
    method: Method,
    url: Url,
    body: Option<String>,
}

/// HTTP transport for the Quorum platform APIs.
///
/// Exposes the four verbs the resource clients are written against. Each
/// call builds the URL, derives headers (including the `Authorization`
/// token read from the configured [`crate::auth::Authorizer`]) and hands
/// off to the reauthorizing executor.
///
/// Construction performs no network I/O.
#[derive(Clone, Debug)]
pub struct Transport {
    config: Config,
    http: ReqwestClient,
}

impl Transport {
    /// Creates a transport over the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(config: Config) -> Result<Transport> {
        let http = ReqwestClient::builder().build()?;
        Ok(Self { config, http })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Issues a GET against `subdomain`/`path`.
    pub async fn get(
        &self,
        subdomain: &str,
        path: &str,
        query: Option<&QueryParams>,
    ) -> Result<NormalizedResponse> {
        self.request(Method::GET, subdomain, path, query, None::<&()>)
            .await
    }

    /// Issues a DELETE against `subdomain`/`path`.
    pub async fn delete(
        &self,
        subdomain: &str,
        path: &str,
        query: Option<&QueryParams>,
    ) -> Result<NormalizedResponse> {
        self.request(Method::DELETE, subdomain, path, query, None::<&()>)
            .await
    }

    /// Issues a POST against `subdomain`/`path` with an optional JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        subdomain: &str,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&B>,
    ) -> Result<NormalizedResponse> {
        self.request(Method::POST, subdomain, path, query, body)
            .await
    }

    /// Issues a PATCH against `subdomain`/`path` with an optional JSON body.
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        subdomain: &str,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&B>,
    ) -> Result<NormalizedResponse> {
        self.request(Method::PATCH, subdomain, path, query, body)
            .await
    }

    async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        subdomain: &str,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&B>,
    ) -> Result<NormalizedResponse> {
        let url = super::url::build(&self.config, subdomain, path, query)?;
        let body = body.map(serde_json::to_string).transpose()?;

        self.execute(RequestParts { method, url, body }).await
    }

    /// The core state machine: `Sent -> {Success, AuthFailure,
    /// OtherFailure}`, with `AuthFailure -> Retrying -> {Success,
    /// OtherFailure}`.
    ///
    /// A 401 or 403 triggers `reauthorize()` and exactly one re-issue of
    /// the same method, URL and body; the retried request re-derives its
    /// headers through the normal path so it picks up whatever token the
    /// refresh made current. The second response is normalized whatever its
    /// status, so a repeated rejection surfaces as a status error.
    #[tracing::instrument(
        level = "debug",
        skip(self, parts),
        fields(method = %parts.method, path = parts.url.path(), status_code)
    )]
    async fn execute(&self, parts: RequestParts) -> Result<NormalizedResponse> {
        let response = self.send(&parts).await?;
        let status = response.status();

        tracing::Span::current().record("status_code", status.as_u16());

        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            tracing::warn!(
                status = %status,
                method = %parts.method,
                path = parts.url.path(),
                "authorization rejected, refreshing credentials and retrying once"
            );
            drop(response);

            self.config.authorizer().reauthorize().await?;

            let retried = self.send(&parts).await?;
            return response::normalize(&parts.method, retried).await;
        }

        response::normalize(&parts.method, response).await
    }

    /// One attempt: derive headers, send, surface transport failures.
    async fn send(&self, parts: &RequestParts) -> Result<reqwest::Response> {
        let headers = headers::build(&self.config)?;

        let mut request = self
            .http
            .request(parts.method.clone(), parts.url.clone())
            .headers(headers);
        if let Some(body) = &parts.body {
            request = request.body(body.clone());
        }

        Ok(request.send().await?)
    }
}
