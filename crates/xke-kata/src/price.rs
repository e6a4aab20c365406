//! Prices: sum-type dispatch and loops.
//!
//! A [`Price`] is either standard, promotional, or something the kata does
//! not know how to price. Resolution is an exhaustive `match`; unknown
//! prices resolve to 0 rather than failing.
//!
//! JSON form is tagged by `kind`:
//!
//! ```json
//! {"kind": "standard", "value": 10}
//! {"kind": "promotional", "value": 20, "discount": 5}
//! ```
//!
//! Any other `kind` decodes as [`Price::Unpriced`].
//!
//! Arithmetic wraps on `i32` overflow, the same as `factorial`.

use serde::{Deserialize, Serialize};

/// Flat discount applied to a basket holding enough promotional prices.
pub const MULTI_PROMOTION_DISCOUNT: i32 = 5;

/// Number of promotional prices that triggers [`MULTI_PROMOTION_DISCOUNT`].
pub const MULTI_PROMOTION_THRESHOLD: usize = 2;

/// A flat price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardPrice {
    pub value: i32,
}

/// A price with a discount taken off its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionalPrice {
    pub value: i32,
    pub discount: i32,
}

/// One priced item in a basket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Price {
    Standard(StandardPrice),
    Promotional(PromotionalPrice),
    /// Any price kind without a pricing rule.
    #[serde(other)]
    Unpriced,
}

impl Price {
    pub fn standard(value: i32) -> Self {
        Self::Standard(StandardPrice { value })
    }

    pub fn promotional(value: i32, discount: i32) -> Self {
        Self::Promotional(PromotionalPrice { value, discount })
    }

    pub fn is_promotional(&self) -> bool {
        matches!(self, Self::Promotional(_))
    }
}

impl From<StandardPrice> for Price {
    fn from(price: StandardPrice) -> Self {
        Self::Standard(price)
    }
}

impl From<PromotionalPrice> for Price {
    fn from(price: PromotionalPrice) -> Self {
        Self::Promotional(price)
    }
}

/// Amount due for one price.
pub fn compute_price(price: &Price) -> i32 {
    match price {
        Price::Promotional(PromotionalPrice { value, discount }) => value.wrapping_sub(*discount),
        Price::Standard(StandardPrice { value }) => *value,
        Price::Unpriced => 0,
    }
}

/// Amount due for a basket of prices.
///
/// Each price resolves through [`compute_price`]; a basket with at least
/// [`MULTI_PROMOTION_THRESHOLD`] promotional prices gets
/// [`MULTI_PROMOTION_DISCOUNT`] off the total, once.
pub fn compute_total_price(prices: &[Price]) -> i32 {
    let mut amount: i32 = 0;
    let mut promotions = 0;
    for price in prices {
        amount = amount.wrapping_add(compute_price(price));
        if price.is_promotional() {
            promotions += 1;
        }
    }

    if promotions >= MULTI_PROMOTION_THRESHOLD {
        amount.wrapping_sub(MULTI_PROMOTION_DISCOUNT)
    } else {
        amount
    }
}
