//! Exercise registry.
//!
//! Every kata function is reachable by a stable snake_case name and can be
//! evaluated from a JSON input. Inputs use the natural JSON form of the
//! function's argument:
//!
//! | exercise                | input                          | output        |
//! |-------------------------|--------------------------------|---------------|
//! | `url`                   | ignored                        | string        |
//! | `is_secured`            | string                         | bool          |
//! | `factorial`             | integer                        | integer       |
//! | `checked_factorial`     | integer                        | integer       |
//! | `remaining_time`        | integer                        | string        |
//! | `pair`                  | integer                        | bool          |
//! | `product`               | `[a, b]`                       | integer       |
//! | `compute_price`         | price object                   | integer       |
//! | `convert_url_param`     | string                         | integer/null  |
//! | `convert_price_to_long` | `{"value": n}` or null         | integer       |
//! | `generate_integer_list` | integer                        | integer array |
//! | `sum_sequence_numbers`  | integer                        | integer       |
//! | `compute_total_price`   | array of price objects         | integer       |
//!
//! Integer outputs wrap on `i32` overflow. `generate_integer_list` rejects
//! any `max` above [`MAX_LIST_LEN`](crate::ranges::MAX_LIST_LEN).

use crate::error::KataError;
use crate::price::{Price, StandardPrice};
use crate::{basics, lambdas, nullable, price, ranges};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// A kata function reachable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    Url,
    IsSecured,
    Factorial,
    CheckedFactorial,
    RemainingTime,
    Pair,
    Product,
    ComputePrice,
    ConvertUrlParam,
    ConvertPriceToLong,
    GenerateIntegerList,
    SumSequenceNumbers,
    ComputeTotalPrice,
}

impl Exercise {
    /// All exercises, in kata order.
    pub const ALL: [Exercise; 13] = [
        Self::Url,
        Self::IsSecured,
        Self::Factorial,
        Self::CheckedFactorial,
        Self::RemainingTime,
        Self::Pair,
        Self::Product,
        Self::ComputePrice,
        Self::ConvertUrlParam,
        Self::ConvertPriceToLong,
        Self::GenerateIntegerList,
        Self::SumSequenceNumbers,
        Self::ComputeTotalPrice,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::IsSecured => "is_secured",
            Self::Factorial => "factorial",
            Self::CheckedFactorial => "checked_factorial",
            Self::RemainingTime => "remaining_time",
            Self::Pair => "pair",
            Self::Product => "product",
            Self::ComputePrice => "compute_price",
            Self::ConvertUrlParam => "convert_url_param",
            Self::ConvertPriceToLong => "convert_price_to_long",
            Self::GenerateIntegerList => "generate_integer_list",
            Self::SumSequenceNumbers => "sum_sequence_numbers",
            Self::ComputeTotalPrice => "compute_total_price",
        }
    }

    /// The language feature this exercise practices.
    pub fn lesson(self) -> &'static str {
        match self {
            Self::Url => "string templates",
            Self::IsSecured => "expression-bodied functions",
            Self::Factorial => "conditional expressions",
            Self::CheckedFactorial => "fallible folds",
            Self::RemainingTime => "match guards",
            Self::Pair | Self::Product => "function values",
            Self::ComputePrice => "sum-type dispatch",
            Self::ConvertUrlParam => "optional values",
            Self::ConvertPriceToLong => "optional chaining with defaults",
            Self::GenerateIntegerList => "ranges",
            Self::SumSequenceNumbers => "progressions",
            Self::ComputeTotalPrice => "loops",
        }
    }

    /// Decode `input`, run the exercise, and encode its result.
    pub fn evaluate(self, input: &Value) -> Result<Value, KataError> {
        tracing::debug!(exercise = self.name(), %input, "evaluating exercise");

        let output = match self {
            Self::Url => json!(basics::url()),
            Self::IsSecured => {
                let url: String = self.decode(input)?;
                json!(basics::is_secured(&url))
            }
            Self::Factorial => json!(basics::factorial(self.decode(input)?)),
            Self::CheckedFactorial => json!(basics::checked_factorial(self.decode(input)?)?),
            Self::RemainingTime => json!(basics::remaining_time(self.decode(input)?)),
            Self::Pair => json!(lambdas::PAIR(self.decode(input)?)),
            Self::Product => {
                let (a, b): (i32, i32) = self.decode(input)?;
                json!(lambdas::PRODUCT(a, b))
            }
            Self::ComputePrice => {
                let item: Price = self.decode(input)?;
                json!(price::compute_price(&item))
            }
            Self::ConvertUrlParam => {
                let url: String = self.decode(input)?;
                json!(nullable::convert_url_param(&url))
            }
            Self::ConvertPriceToLong => {
                let item: Option<StandardPrice> = self.decode(input)?;
                json!(nullable::convert_price_to_long(item.as_ref()))
            }
            Self::GenerateIntegerList => {
                let max: i32 = self.decode(input)?;
                if max > ranges::MAX_LIST_LEN {
                    return Err(KataError::InvalidInput {
                        exercise: self.name().to_string(),
                        detail: format!("max {max} exceeds {}", ranges::MAX_LIST_LEN),
                    });
                }
                json!(ranges::generate_integer_list(max))
            }
            Self::SumSequenceNumbers => json!(ranges::sum_sequence_numbers(self.decode(input)?)),
            Self::ComputeTotalPrice => {
                let basket: Vec<Price> = self.decode(input)?;
                json!(price::compute_total_price(&basket))
            }
        };

        tracing::debug!(exercise = self.name(), %output, "exercise evaluated");
        Ok(output)
    }

    fn decode<T: DeserializeOwned>(self, input: &Value) -> Result<T, KataError> {
        T::deserialize(input).map_err(|err| KataError::invalid_input(self.name(), err))
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Exercise {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|exercise| exercise.name() == wanted)
            .ok_or_else(|| KataError::UnknownExercise(s.to_string()))
    }
}

/// Evaluate the exercise registered under `name`.
pub fn evaluate(name: &str, input: &Value) -> Result<Value, KataError> {
    name.parse::<Exercise>()?.evaluate(input)
}
