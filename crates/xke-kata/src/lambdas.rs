//! Function values.
//!
//! Non-capturing closures coerce to plain `fn` pointers, so they can live in
//! constants and be passed wherever a function is expected.

/// True when the argument is even.
pub const PAIR: fn(i32) -> bool = |n| n % 2 == 0;

/// Product of the two arguments, wrapping on overflow.
pub const PRODUCT: fn(i32, i32) -> i32 = |a, b| a.wrapping_mul(b);
