//! Blocking HTTP client for the query endpoint.

use std::time::Duration;

use url::Url;

use crate::config::AtlasConfig;
use crate::error::{Error, Result};
use crate::model::{QueryRequest, QueryResponse};
use crate::response;

/// Posts queries and decodes the answers. Cheap to clone; clones share the
/// connection pool.
#[derive(Clone, Debug)]
pub struct QueryClient {
    http: reqwest::blocking::Client,
    url: Url,
}

impl QueryClient {
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("mindfield/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(format!("client error: {e}")))?;
        Ok(Self { http, url })
    }

    pub fn from_config(config: &AtlasConfig) -> Result<Self> {
        Self::new(
            config.endpoint_url()?,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// `POST {"query": ...}` and decode the body. Connection failures,
    /// non-success statuses and malformed JSON all come back as `Err`.
    pub fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        log::info!("POST {} query={:?}", self.url, request.query);
        let res = self.http.post(self.url.clone()).json(request).send()?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        let body = res.text()?;
        let decoded = response::decode(&body)?;
        log::debug!("decoded {:?} response ({} bytes)", decoded.mode(), body.len());
        Ok(decoded)
    }
}
