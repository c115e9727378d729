//! Conversions from wire types to domain types for oil prices.

use super::wire::{OilPriceRecord, OilPriceResponse};
use super::PriceEntry;
use crate::error::ParseError;

impl From<OilPriceRecord> for PriceEntry {
    fn from(r: OilPriceRecord) -> Self {
        Self {
            trade_date: r.trade_dt,
            product_code: r.prodcd,
            product_name: r.prodnm,
            price: r.price,
            diff: r.diff,
        }
    }
}

impl From<OilPriceResponse> for Vec<PriceEntry> {
    fn from(resp: OilPriceResponse) -> Self {
        resp.result.oil.into_iter().map(PriceEntry::from).collect()
    }
}

/// Decode a raw `avgAllPrice.do` body into price entries, in server order.
///
/// Fails for the whole body if any single record does not match; no partial
/// list is ever returned.
pub fn decode(text: &str) -> Result<Vec<PriceEntry>, ParseError> {
    let resp: OilPriceResponse = serde_json::from_str(text)?;
    Ok(resp.into())
}
