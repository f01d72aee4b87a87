//! Print the outcome of an invocation and pick the exit code.
//!
//! stdout carries only the formatted result. Diagnostics go to the error
//! writer, so a missing `solution` leaves stdout empty.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::args::Arg;
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::exit_codes;
use crate::invoke::invoke;
use crate::solver::Challenge;

/// Invoke `challenge` and write the result or a diagnostic.
///
/// Returns the exit code the process should terminate with. The `Err` case
/// is reserved for failures writing to `out` or `err`.
#[instrument(skip_all)]
pub fn run(
    challenge: &dyn Challenge,
    args: &mut [Arg],
    config: &HarnessConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    match invoke(challenge, args, config) {
        Ok(value) => {
            writeln!(out, "{value}").context("write result")?;
            out.flush().context("flush result")?;
            info!("result printed");
            Ok(exit_codes::OK)
        }
        Err(failure) => {
            write_diagnostic(&failure, config, err).context("write diagnostic")?;
            Ok(failure.exit_code())
        }
    }
}

fn write_diagnostic(
    failure: &HarnessError,
    config: &HarnessConfig,
    err: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(err, "{failure}")?;
    match failure {
        HarnessError::MethodNotFound { .. } => {}
        HarnessError::ArgumentMismatch { detail } => writeln!(err, "{detail}")?,
        HarnessError::InvocationFailure { trace, .. } => {
            if config.print_trace && !trace.is_empty() {
                write_trace(trace, config.trace_limit_lines, err)?;
            }
        }
    }
    err.flush()
}

fn write_trace(trace: &str, limit: usize, err: &mut dyn Write) -> std::io::Result<()> {
    let total = trace.lines().count();
    for line in trace.lines().take(limit) {
        writeln!(err, "{line}")?;
    }
    if total > limit {
        writeln!(err, "[trace truncated {} lines]", total - limit)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ArgKind;
    use crate::solver::{Returns, Signature, Solver};
    use crate::value::Value;

    struct Missing;

    impl Challenge for Missing {
        fn solution(&self) -> Option<&dyn Solver> {
            None
        }
    }

    struct Echo(Returns);

    impl Challenge for Echo {
        fn solution(&self) -> Option<&dyn Solver> {
            Some(self)
        }
    }

    impl Solver for Echo {
        fn signature(&self) -> Signature {
            Signature::new([ArgKind::Ints], self.0)
        }

        fn solve(&self, args: &mut [Arg]) -> anyhow::Result<Option<Value>> {
            Ok(Some(Value::Bool(!args[0].as_ints()?.is_empty())))
        }
    }

    struct Failing;

    impl Challenge for Failing {
        fn solution(&self) -> Option<&dyn Solver> {
            Some(self)
        }
    }

    impl Solver for Failing {
        fn signature(&self) -> Signature {
            Signature::new([], Returns::Value)
        }

        fn solve(&self, _args: &mut [Arg]) -> anyhow::Result<Option<Value>> {
            anyhow::bail!("nums must be non-empty")
        }
    }

    fn capture(
        challenge: &dyn Challenge,
        args: &mut [Arg],
        config: &HarnessConfig,
    ) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(challenge, args, config, &mut out, &mut err).expect("run");
        (
            code,
            String::from_utf8(out).expect("utf8 stdout"),
            String::from_utf8(err).expect("utf8 stderr"),
        )
    }

    #[test]
    fn prints_value_with_newline() {
        let mut args = [Arg::Ints(vec![1])];
        let (code, out, err) = capture(&Echo(Returns::Value), &mut args, &HarnessConfig::default());
        assert_eq!(code, exit_codes::OK);
        assert_eq!(out, "true\n");
        assert!(err.is_empty());
    }

    #[test]
    fn void_prints_first_argument() {
        let mut args = [Arg::Ints(vec![2, 7])];
        let (code, out, _) = capture(&Echo(Returns::Void), &mut args, &HarnessConfig::default());
        assert_eq!(code, exit_codes::OK);
        assert_eq!(out, "[2, 7]\n");
    }

    #[test]
    fn missing_method_writes_only_diagnostic() {
        let (code, out, err) = capture(&Missing, &mut [], &HarnessConfig::default());
        assert_eq!(code, exit_codes::OK);
        assert!(out.is_empty());
        assert_eq!(err, "Method 'solution' not found\n");
    }

    #[test]
    fn argument_mismatch_reports_detail_and_fails() {
        let mut args = [Arg::Int(9)];
        let (code, out, err) = capture(&Echo(Returns::Value), &mut args, &HarnessConfig::default());
        assert_eq!(code, exit_codes::FAILURE);
        assert!(out.is_empty());
        assert_eq!(
            err,
            "Runtime Error: Argument Mismatch. Check input types.\n\
             argument 0: expected int[], got int\n"
        );
    }

    #[test]
    fn invocation_failure_reports_message_and_trace() {
        let (code, out, err) = capture(&Failing, &mut [], &HarnessConfig::default());
        assert_eq!(code, exit_codes::FAILURE);
        assert!(out.is_empty());
        let mut lines = err.lines();
        assert_eq!(lines.next(), Some("Runtime Error: nums must be non-empty"));
        assert!(lines.next().is_some(), "trace follows the message");
    }

    #[test]
    fn trace_can_be_suppressed() {
        let config = HarnessConfig {
            print_trace: false,
            ..HarnessConfig::default()
        };
        let (_, _, err) = capture(&Failing, &mut [], &config);
        assert_eq!(err, "Runtime Error: nums must be non-empty\n");
    }

    #[test]
    fn long_traces_are_truncated() {
        let mut err = Vec::new();
        write_trace("a\nb\nc\nd", 2, &mut err).expect("write");
        assert_eq!(
            String::from_utf8(err).expect("utf8"),
            "a\nb\n[trace truncated 2 lines]\n"
        );
    }
}
