//! Network constants for the Opinet SDK.

use std::time::Duration;

/// Default endpoint for the nationwide daily average price feed.
///
/// The trailing `?` is part of the published endpoint; the request carries no
/// query parameters, everything goes in the form body.
pub const DEFAULT_API_URL: &str = "https://www.opinet.co.kr/api/avgAllPrice.do?";

/// Value sent in the `out` form field.
pub const OUTPUT_FORMAT: &str = "json";

/// Pause inserted before every fetch so the loading indicator is visible.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(1000);
