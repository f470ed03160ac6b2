//! Client object for the message/key exchange service.

use crate::{config::Config, error::Result};
use reqwest::Url;
use serde::{de::DeserializeOwned, Serialize};

/// A `PigeonholeClient` wraps the HTTP plumbing shared by the message
/// exchange and key directory operations. It holds no per-party state;
/// every operation is a single independent request/response exchange, so
/// one client can serve any number of identifiers.
#[derive(Debug)]
pub struct PigeonholeClient {
    config: Config,
    http: reqwest::Client,
}

impl PigeonholeClient {
    /// Build a client for the service described by `config`.
    pub fn connect(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn message_url(&self) -> Url {
        self.config.message_url.clone()
    }

    pub(crate) fn key_url(&self) -> Url {
        self.config.key_url.clone()
    }

    /// POST `request` as JSON and parse the response body.
    ///
    /// Timeouts and cancellation are whatever `reqwest` applies by default;
    /// this client adds no policy of its own.
    pub(crate) async fn post_json<B, R>(&self, url: Url, request: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let response = self.http.post(url).json(request).send().await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET `url` with `query` appended, handing back the raw response so
    /// callers can apply their own status handling.
    pub(crate) async fn get<Q>(&self, url: Url, query: &Q) -> Result<reqwest::Response>
    where
        Q: Serialize,
    {
        Ok(self.http.get(url).query(query).send().await?)
    }
}
