//! Oil prices sub-client — stateless fetch + decode.

use crate::board::fetch_entries;
use crate::client::OpinetClient;
use crate::domain::oil_price::PriceEntry;
use crate::error::SdkError;

pub struct OilPrices<'a> {
    pub(crate) client: &'a OpinetClient,
}

impl<'a> OilPrices<'a> {
    /// Today's nationwide averages, one entry per product, in server order.
    pub async fn get(&self) -> Result<Vec<PriceEntry>, SdkError> {
        fetch_entries(&self.client.http).await
    }

    /// Raw response body, undecoded.
    pub async fn get_raw(&self) -> Result<String, SdkError> {
        Ok(self.client.http.fetch_avg_all_price().await?)
    }
}
