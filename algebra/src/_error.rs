use thiserror::Error;

use crate::Operator;

/// An error raised when the arguments given to [`algebra_element`](crate::algebra_element)
/// can not make a valid operator.
#[derive(Debug, Error)]
pub enum AlgebraError {
    /// The operator was given the wrong number of arguments
    #[error("'{operator}' expects {expected} argument(s), got {found}")]
    Arity {
        /// The operator being built
        operator: Operator,
        /// A description of the accepted number of arguments
        expected: String,
        /// The number of arguments actually given
        found: usize,
    },
    /// An argument does not have the structure expected by the operator
    #[error("Malformed argument for '{operator}': {reason}")]
    Malformed {
        /// The operator being built
        operator: Operator,
        /// What was wrong with the argument
        reason: String,
    },
}
