//! Ranges and progressions.

/// Largest `max` the exercise registry accepts for `generate_integer_list`.
pub const MAX_LIST_LEN: i32 = 1_000_000;

/// `[1, 2, ..., max]`, empty when `max < 1`.
///
/// The list is fully materialized, so very large `max` needs memory to
/// match; the exercise registry caps it at [`MAX_LIST_LEN`].
pub fn generate_integer_list(max: i32) -> Vec<i32> {
    (1..=max).collect()
}

/// Sum of the multiples of 3 in `[0, max]`, wrapping on overflow.
pub fn sum_sequence_numbers(max: i32) -> i32 {
    (0..=max).step_by(3).fold(0, i32::wrapping_add)
}
