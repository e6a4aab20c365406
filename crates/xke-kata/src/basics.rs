//! Properties, string templates, and conditional expressions.
//!
//! - `HOST` / `PORT` are compile-time constants.
//! - `url()` interpolates both into the blog address.
//! - `factorial` is a single `if` expression; `remaining_time` a single
//!   guarded `match`.

use crate::error::KataError;

/// Host of the XKE blog.
pub const HOST: &str = "xebia.fr";

/// Default HTTPS port.
pub const PORT: u16 = 443;

const SECONDS_PER_MINUTE: i32 = 60;
const SECONDS_PER_HOUR: i32 = 3_600;
const SECONDS_PER_DAY: i32 = 86_400;

/// The blog URL, built from [`HOST`] and [`PORT`] with an explicit port.
pub fn url() -> String {
    format!("https://blog.{HOST}:{PORT}")
}

/// True iff `url` starts with `https`.
pub fn is_secured(url: &str) -> bool {
    url.starts_with("https")
}

/// `n!`, with every `n <= 1` (negatives included) taking the base case.
///
/// Overflow wraps instead of panicking. Use [`checked_factorial`] to get an
/// error for negative input or a result that does not fit in an `i32`.
pub fn factorial(n: i32) -> i32 {
    if n <= 1 { 1 } else { n.wrapping_mul(factorial(n - 1)) }
}

/// `n!` for `0 <= n <= 12`; anything else is an error.
pub fn checked_factorial(n: i32) -> Result<i32, KataError> {
    if n < 0 {
        return Err(KataError::NegativeFactorial(n));
    }
    (2..=n).try_fold(1i32, |acc, k| {
        acc.checked_mul(k).ok_or(KataError::Overflow("factorial"))
    })
}

/// Render a duration in the largest whole unit it reaches.
///
/// Division truncates: 125 seconds is `"2 minute(s)"`.
pub fn remaining_time(duration_in_seconds: i32) -> String {
    match duration_in_seconds {
        d if d < SECONDS_PER_MINUTE => format!("{d} second(s)"),
        d if d < SECONDS_PER_HOUR => format!("{} minute(s)", d / SECONDS_PER_MINUTE),
        d if d < SECONDS_PER_DAY => format!("{} hour(s)", d / SECONDS_PER_HOUR),
        d => format!("{} day(s)", d / SECONDS_PER_DAY),
    }
}
