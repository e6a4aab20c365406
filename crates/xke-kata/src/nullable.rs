//! Optional values.
//!
//! Absence is an `Option`, never a panic: parse failures collapse to `None`
//! and missing references fall back to a default.

use crate::price::StandardPrice;

/// The last query parameter of `url`, parsed as an integer.
///
/// `None` when the URL has no query, the last parameter has no `=`, or its
/// value is not a valid `i32`. Only the segment between the first and
/// second `?` is considered.
pub fn convert_url_param(url: &str) -> Option<i32> {
    let query = url.split('?').nth(1)?;
    let last = query.split('&').next_back()?;
    last.split('=').nth(1)?.parse().ok()
}

/// The price value widened to `i64`, or 0 when there is no price.
pub fn convert_price_to_long(price: Option<&StandardPrice>) -> i64 {
    price.map(|p| i64::from(p.value)).unwrap_or(0)
}
