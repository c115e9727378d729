//! Low-level HTTP client — `OpinetHttp`.
//!
//! One method per API endpoint. Returns the raw body text; decoding into
//! domain types happens in `domain::oil_price`.

use crate::auth::Credential;
use crate::board::PriceSource;
use crate::error::{ConfigError, HttpError};
use crate::network::OUTPUT_FORMAT;

use reqwest::{Client, Url};
use std::future::Future;
use std::time::Duration;

/// Low-level HTTP client for the Opinet API.
pub struct OpinetHttp {
    url: Url,
    client: Client,
    /// API key. NEVER logged or exposed publicly.
    credential: Credential,
}

impl OpinetHttp {
    /// Build a client for `url`. `timeout` of `None` keeps reqwest's defaults.
    pub fn new(
        url: &str,
        credential: Credential,
        timeout: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        let url = Url::parse(url).map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;

        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }

        Ok(Self {
            url,
            client: builder.build().map_err(ConfigError::ClientBuild)?,
            credential,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    // ── Prices ───────────────────────────────────────────────────────────

    /// `POST avgAllPrice.do` with `code=<key>&out=json`. Returns the body text.
    pub async fn fetch_avg_all_price(&self) -> Result<String, HttpError> {
        let form = [
            ("code", self.credential.expose()),
            ("out", OUTPUT_FORMAT),
        ];
        self.post_form(&form).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn post_form(&self, form: &[(&str, &str)]) -> Result<String, HttpError> {
        tracing::debug!(url = %self.url, "POST");

        let resp = self
            .client
            .post(self.url.clone())
            .form(form)
            .send()
            .await?;
        let status = resp.status();
        tracing::debug!(status = status.as_u16(), "Response received");

        if status.is_success() {
            return Ok(resp.text().await?);
        }

        let body = resp.text().await.unwrap_or_default();
        Err(HttpError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl PriceSource for OpinetHttp {
    fn fetch_raw(&self) -> impl Future<Output = Result<String, HttpError>> + Send {
        self.fetch_avg_all_price()
    }
}

impl Clone for OpinetHttp {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            client: self.client.clone(),
            credential: self.credential.clone(),
        }
    }
}

impl std::fmt::Debug for OpinetHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpinetHttp")
            .field("url", &self.url.as_str())
            .field("credential", &self.credential)
            .finish()
    }
}
