//! High-level client — `OpinetClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::auth::Credential;
use crate::board::PriceBoard;
use crate::domain::oil_price::client::OilPrices;
use crate::error::{ConfigError, SdkError};
use crate::http::OpinetHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::oil_price::client::OilPrices as OilPricesClient;

/// The primary entry point for the Opinet SDK.
///
/// `client.oil_prices()` fetches on demand; `client.board()` gives an
/// observable Loading / Success / Error model for a UI.
#[derive(Debug, Clone)]
pub struct OpinetClient {
    pub(crate) http: OpinetHttp,
    pub(crate) loading_delay: Duration,
}

impl OpinetClient {
    pub fn builder() -> OpinetClientBuilder {
        OpinetClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn oil_prices(&self) -> OilPrices<'_> {
        OilPrices { client: self }
    }

    /// New board driving its own state holder over this client's transport.
    pub fn board(&self) -> PriceBoard<OpinetHttp> {
        PriceBoard::new(self.http.clone(), self.loading_delay)
    }

    pub fn http(&self) -> &OpinetHttp {
        &self.http
    }

    pub fn loading_delay(&self) -> Duration {
        self.loading_delay
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub struct OpinetClientBuilder {
    base_url: String,
    credential: Option<Credential>,
    loading_delay: Duration,
    timeout: Option<Duration>,
}

impl Default for OpinetClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            credential: None,
            loading_delay: crate::network::DEFAULT_LOADING_DELAY,
            timeout: None,
        }
    }
}

impl OpinetClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Use this key instead of the one compiled in through `API_KEY`.
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Pause before each board fetch. Zero disables it.
    pub fn loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = delay;
        self
    }

    /// Whole-request timeout. Unset keeps the transport default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<OpinetClient, SdkError> {
        let credential = self
            .credential
            .or_else(Credential::from_build_env)
            .ok_or(ConfigError::MissingCredential)?;

        Ok(OpinetClient {
            http: OpinetHttp::new(&self.base_url, credential, self.timeout)?,
            loading_delay: self.loading_delay,
        })
    }
}
