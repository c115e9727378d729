//! Oil price domain — daily nationwide average prices per fuel product.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use convert::decode;
pub use state::{
    AttemptToken, FailureKind, FetchFailure, OperationState, StateHolder, StateSubscription,
};

/// One fuel product's average price for a trade date.
///
/// Values are kept exactly as the upstream sends them; nothing is parsed as a
/// number or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Trade date, `YYYYMMDD`.
    pub trade_date: String,
    /// Product code, e.g. `B027` (gasoline) or `D047` (diesel).
    pub product_code: String,
    pub product_name: String,
    pub price: String,
    /// Change versus the previous trade date.
    pub diff: String,
}
