//! Error types for kata evaluation.

/// Errors raised by the exercise registry and the checked exercises.
///
/// The plain exercises are total and never produce one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KataError {
    /// No exercise is registered under this name.
    #[error("unknown exercise: {0}")]
    UnknownExercise(String),

    /// The JSON input does not match what the exercise takes.
    #[error("invalid input for {exercise}: {detail}")]
    InvalidInput { exercise: String, detail: String },

    /// Factorial is not defined for negative numbers.
    #[error("factorial of negative number {0}")]
    NegativeFactorial(i32),

    /// The result does not fit in the output type.
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),
}

impl KataError {
    pub(crate) fn invalid_input(exercise: &str, err: serde_json::Error) -> Self {
        Self::InvalidInput {
            exercise: exercise.to_string(),
            detail: err.to_string(),
        }
    }
}
