//! Failure kinds of a single harness invocation.
//!
//! Every failure is terminal: there are no retries, and each kind maps to a
//! fixed exit code (see [`HarnessError::exit_code`]).

use thiserror::Error;

use crate::exit_codes;

/// Why a `solution` invocation did not produce a printable result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HarnessError {
    /// The challenge body exposes no operation with the expected name.
    #[error("Method '{name}' not found")]
    MethodNotFound { name: String },

    /// The fixed sample arguments do not satisfy the declared parameters.
    #[error("Runtime Error: Argument Mismatch. Check input types.")]
    ArgumentMismatch { detail: String },

    /// The call failed for any other reason (returned error or panic).
    #[error("Runtime Error: {message}")]
    InvocationFailure { message: String, trace: String },
}

impl HarnessError {
    pub fn argument_mismatch(detail: impl Into<String>) -> Self {
        HarnessError::ArgumentMismatch {
            detail: detail.into(),
        }
    }

    /// Process exit code for this failure.
    ///
    /// A missing method is an early return, not a failure of the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            HarnessError::MethodNotFound { .. } => exit_codes::OK,
            HarnessError::ArgumentMismatch { .. } | HarnessError::InvocationFailure { .. } => {
                exit_codes::FAILURE
            }
        }
    }
}
