//! The contract between the harness and a challenge body.
//!
//! A challenge body is untrusted code. The harness only relies on two things:
//! it may expose a `solution` operation callable with the fixed sample
//! arguments, and a void `solution` mutates its first argument in place.

use anyhow::Result;

use crate::args::{Arg, ArgKind};
use crate::error::HarnessError;
use crate::value::Value;

/// Name of the operation the harness looks for.
pub const METHOD_NAME: &str = "solution";

/// What a `solution` hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returns {
    /// Returns a value; the harness prints it.
    Value,
    /// Returns nothing; the harness prints the first argument afterwards.
    Void,
}

/// Declared parameter kinds and return kind of a `solution`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<ArgKind>,
    pub returns: Returns,
}

impl Signature {
    pub fn new(params: impl Into<Vec<ArgKind>>, returns: Returns) -> Self {
        Self {
            params: params.into(),
            returns,
        }
    }

    /// Check the sample arguments against the declared parameters.
    pub fn check(&self, args: &[Arg]) -> Result<(), HarnessError> {
        if args.len() != self.params.len() {
            return Err(HarnessError::argument_mismatch(format!(
                "expected {} argument(s), got {}",
                self.params.len(),
                args.len()
            )));
        }
        for (index, (expected, arg)) in self.params.iter().zip(args).enumerate() {
            if arg.kind() != *expected {
                return Err(HarnessError::argument_mismatch(format!(
                    "argument {index}: expected {expected}, got {}",
                    arg.kind()
                )));
            }
        }
        Ok(())
    }
}

/// A callable `solution`.
pub trait Solver {
    fn signature(&self) -> Signature;

    /// Run against the sample arguments.
    ///
    /// `Ok(None)` means "no value": printed as `null` for value-returning
    /// solvers, and expected for void ones. Returning a
    /// [`HarnessError::ArgumentMismatch`] keeps that classification; any
    /// other error is an invocation failure.
    fn solve(&self, args: &mut [Arg]) -> Result<Option<Value>>;
}

/// A challenge body, which may or may not expose a `solution`.
pub trait Challenge {
    fn solution(&self) -> Option<&dyn Solver>;
}
