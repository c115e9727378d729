//! Oil price state containers — the observable Loading / Success / Error cell.
//!
//! [`StateHolder`] is a single-slot observable: one current value plus a
//! fan-out list of subscribers. Every published value reaches every live
//! subscriber in emission order before the next write is accepted.

use super::PriceEntry;
use crate::error::SdkError;
use async_lock::Mutex;
use futures_util::stream::Stream;
use tokio::sync::mpsc;

// ─── OperationState ──────────────────────────────────────────────────────────

/// Which stage of an attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport failure or non-success HTTP status.
    Network,
    /// Body did not decode into the expected shape.
    Parse,
}

/// Payload of [`OperationState::Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind,
            message: if message.is_empty() {
                "Unknown error".to_string()
            } else {
                message
            },
        }
    }
}

impl From<&SdkError> for FetchFailure {
    fn from(e: &SdkError) -> Self {
        let kind = match e {
            SdkError::Parse(_) => FailureKind::Parse,
            SdkError::Http(_) | SdkError::Config(_) => FailureKind::Network,
        };
        Self::new(kind, e.to_string())
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Current state of the price list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OperationState {
    #[default]
    Loading,
    Success(Vec<PriceEntry>),
    Error(FetchFailure),
}

impl OperationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, OperationState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn entries(&self) -> Option<&[PriceEntry]> {
        match self {
            OperationState::Success(entries) => Some(entries),
            OperationState::Loading | OperationState::Error(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            OperationState::Error(failure) => Some(failure),
            OperationState::Loading | OperationState::Success(_) => None,
        }
    }
}

// ─── StateHolder ─────────────────────────────────────────────────────────────

/// Identifies one fetch attempt. Only the most recently started attempt may
/// publish a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AttemptToken(u64);

impl AttemptToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct Inner {
    current: OperationState,
    generation: u64,
    subscribers: Vec<mpsc::UnboundedSender<OperationState>>,
}

impl Inner {
    fn publish(&mut self, state: OperationState) {
        // Closed receivers belong to observers that went away; drop them.
        self.subscribers
            .retain(|tx| tx.send(state.clone()).is_ok());
        self.current = state;
    }
}

/// Observable holder for [`OperationState`].
///
/// Share it behind an `Arc`; all methods take `&self`.
#[derive(Debug)]
pub struct StateHolder {
    inner: Mutex<Inner>,
}

impl StateHolder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                current: OperationState::Loading,
                generation: 0,
                subscribers: Vec::new(),
            }),
        }
    }

    /// Snapshot of the current state.
    pub async fn current(&self) -> OperationState {
        self.inner.lock().await.current.clone()
    }

    /// Generation of the most recently started attempt (0 before the first).
    pub async fn generation(&self) -> u64 {
        self.inner.lock().await.generation
    }

    /// Number of live subscribers.
    pub async fn subscriber_count(&self) -> usize {
        let mut inner = self.inner.lock().await;
        inner.subscribers.retain(|tx| !tx.is_closed());
        inner.subscribers.len()
    }

    /// Subscribe to state changes. The current state is delivered first.
    pub async fn subscribe(&self) -> StateSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock().await;
        // Receiver is alive, so this cannot fail.
        let _ = tx.send(inner.current.clone());
        inner.subscribers.push(tx);
        StateSubscription { rx }
    }

    /// Replace the current state and notify every subscriber.
    ///
    /// Bypasses the attempt guard; prefer [`begin_attempt`](Self::begin_attempt)
    /// and [`complete`](Self::complete) for fetch results.
    pub async fn publish(&self, state: OperationState) {
        self.inner.lock().await.publish(state);
    }

    /// Start a new attempt: bump the generation and publish `Loading`.
    pub async fn begin_attempt(&self) -> AttemptToken {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        let token = AttemptToken(inner.generation);
        inner.publish(OperationState::Loading);
        token
    }

    /// Publish the terminal state of an attempt.
    ///
    /// Returns `false` (and publishes nothing) if a newer attempt has started
    /// since `token` was issued.
    pub async fn complete(&self, token: AttemptToken, state: OperationState) -> bool {
        let mut inner = self.inner.lock().await;
        if token.0 != inner.generation {
            tracing::debug!(
                attempt = token.0,
                latest = inner.generation,
                "Discarding result of superseded attempt"
            );
            return false;
        }
        inner.publish(state);
        true
    }
}

impl Default for StateHolder {
    fn default() -> Self {
        Self::new()
    }
}

// ─── StateSubscription ───────────────────────────────────────────────────────

/// Receiving end of a [`StateHolder`] subscription.
///
/// Dropping it unsubscribes; the holder prunes it on the next publish.
#[derive(Debug)]
pub struct StateSubscription {
    rx: mpsc::UnboundedReceiver<OperationState>,
}

impl StateSubscription {
    /// Wait for the next state. `None` once the holder is gone.
    pub async fn recv(&mut self) -> Option<OperationState> {
        self.rx.recv().await
    }

    /// Next state if one is already queued.
    pub fn try_recv(&mut self) -> Option<OperationState> {
        self.rx.try_recv().ok()
    }

    /// Drain everything queued right now.
    pub fn drain(&mut self) -> Vec<OperationState> {
        let mut out = Vec::new();
        while let Some(state) = self.try_recv() {
            out.push(state);
        }
        out
    }

    pub fn into_stream(mut self) -> impl Stream<Item = OperationState> + Send + Unpin {
        Box::pin(async_stream::stream! {
            while let Some(state) = self.rx.recv().await {
                yield state;
            }
        })
    }
}
