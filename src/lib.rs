//! # Opinet SDK
//!
//! A Rust client for the Opinet daily average fuel price feed
//! (`avgAllPrice.do`), with an observable Loading / Success / Error model for
//! driving list UIs.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Domain types, wire types, decoding, state containers
//! 2. **Auth** — The build-time injected API key
//! 3. **HTTP API** — `OpinetHttp`, one POST per fetch, no retries
//! 4. **High-Level Client** — `OpinetClient` with the `oil_prices()` sub-client
//! 5. **Board** — `PriceBoard`, which turns fetch attempts into published states
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use opinet_sdk::prelude::*;
//!
//! let client = OpinetClient::builder().build()?;
//!
//! let entries = client.oil_prices().get().await?;
//!
//! let board = client.board();
//! let mut states = board.subscribe().await;
//! board.launch();
//! while let Some(state) = states.recv().await {
//!     print!("{}", ListView::render(&state));
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// List view projection of the price state.
pub mod render;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// API key handling.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `OpinetClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: Board ───────────────────────────────────────────────────────────

/// `PriceBoard` — fetch attempts published through a state holder.
pub mod board;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::oil_price::{
        decode, AttemptToken, FailureKind, FetchFailure, OperationState, PriceEntry,
        StateHolder, StateSubscription,
    };

    // Errors
    pub use crate::error::{ConfigError, HttpError, ParseError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_LOADING_DELAY};

    // Auth
    pub use crate::auth::Credential;

    // Board + rendering
    pub use crate::board::{PriceBoard, PriceSource};
    pub use crate::render::{ListView, RowView};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{OilPricesClient, OpinetClient, OpinetClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::OpinetHttp;
}
