//! # XKE Kata
//!
//! The beginner kata: each exercise is one small, pure function that shows
//! one language feature. Nothing here keeps state between calls, and no
//! exercise depends on another except where a price rule is shared.
//!
//! ## Layout
//!
//! ```text
//! basics     ← constants, string templates, if / match expressions
//!     │
//! lambdas    ← function values (PAIR, PRODUCT)
//!     │
//! price      ← sum-type dispatch and loops over prices
//!     │
//! nullable   ← Option chaining with defaults
//!     │
//! ranges     ← inclusive ranges and filtered sums
//!     │
//! exercise   ← by-name registry evaluating any exercise from JSON
//! ```

pub mod basics;
pub mod error;
pub mod exercise;
pub mod lambdas;
pub mod nullable;
pub mod price;
pub mod ranges;

pub use basics::{
    HOST, PORT, checked_factorial, factorial, is_secured, remaining_time, url,
};
pub use error::KataError;
pub use exercise::{Exercise, evaluate};
pub use lambdas::{PAIR, PRODUCT};
pub use nullable::{convert_price_to_long, convert_url_param};
pub use price::{
    MULTI_PROMOTION_DISCOUNT, MULTI_PROMOTION_THRESHOLD, Price, PromotionalPrice, StandardPrice,
    compute_price, compute_total_price,
};
pub use ranges::{generate_integer_list, sum_sequence_numbers};
