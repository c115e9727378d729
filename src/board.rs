//! Price board — runs fetch attempts and publishes their outcome.
//!
//! The board is the boundary where failures stop: every attempt ends in a
//! published [`OperationState`], never in a returned error.
//!
//! ```text
//! refresh()
//!   ├─ begin_attempt        → Loading
//!   ├─ sleep(loading_delay)
//!   ├─ PriceSource::fetch_raw
//!   ├─ decode
//!   └─ complete(token, ..)  → Success | Error   (dropped if superseded)
//! ```

use crate::domain::oil_price::{
    decode, FetchFailure, OperationState, PriceEntry, StateHolder, StateSubscription,
};
use crate::error::{HttpError, SdkError};

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Anything that can produce the raw `avgAllPrice.do` body.
pub trait PriceSource {
    fn fetch_raw(&self) -> impl Future<Output = Result<String, HttpError>> + Send;
}

/// Fetch, then decode. Used by both the board and the stateless sub-client.
pub async fn fetch_entries<S: PriceSource + ?Sized>(
    source: &S,
) -> Result<Vec<PriceEntry>, SdkError> {
    let body = source.fetch_raw().await?;
    Ok(decode(&body)?)
}

/// Owns the observable state for one price list and drives attempts into it.
pub struct PriceBoard<S> {
    source: Arc<S>,
    state: Arc<StateHolder>,
    loading_delay: Duration,
}

impl<S> PriceBoard<S>
where
    S: PriceSource + Send + Sync + 'static,
{
    pub fn new(source: S, loading_delay: Duration) -> Self {
        Self {
            source: Arc::new(source),
            state: Arc::new(StateHolder::new()),
            loading_delay,
        }
    }

    /// Shared state holder, for wiring extra observers.
    pub fn state(&self) -> &Arc<StateHolder> {
        &self.state
    }

    pub fn loading_delay(&self) -> Duration {
        self.loading_delay
    }

    pub async fn subscribe(&self) -> StateSubscription {
        self.state.subscribe().await
    }

    pub async fn current(&self) -> OperationState {
        self.state.current().await
    }

    /// Run one attempt on the current task and return its terminal state.
    ///
    /// If a newer attempt started meanwhile, the returned state is this
    /// attempt's own outcome but it was not published.
    pub async fn refresh(&self) -> OperationState {
        run_attempt(&*self.source, &self.state, self.loading_delay).await
    }

    /// Run one attempt on a background tokio task.
    ///
    /// There is no cancellation: the task always runs to completion, and if
    /// every observer is gone by then the publish simply reaches nobody.
    pub fn launch(&self) -> JoinHandle<OperationState> {
        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let delay = self.loading_delay;
        tokio::spawn(async move { run_attempt(&*source, &state, delay).await })
    }
}

impl<S> Clone for PriceBoard<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
            loading_delay: self.loading_delay,
        }
    }
}

async fn run_attempt<S: PriceSource + ?Sized>(
    source: &S,
    state: &StateHolder,
    loading_delay: Duration,
) -> OperationState {
    let token = state.begin_attempt().await;
    tracing::info!(attempt = token.generation(), "Fetching average oil prices");

    if !loading_delay.is_zero() {
        tokio::time::sleep(loading_delay).await;
    }

    let outcome = match fetch_entries(source).await {
        Ok(entries) => {
            tracing::info!(
                attempt = token.generation(),
                entries = entries.len(),
                "Oil prices loaded"
            );
            OperationState::Success(entries)
        }
        Err(e) => {
            tracing::warn!(attempt = token.generation(), "Oil price fetch failed: {}", e);
            OperationState::Error(FetchFailure::from(&e))
        }
    };

    state.complete(token, outcome.clone()).await;
    outcome
}
