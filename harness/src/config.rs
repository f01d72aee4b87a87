//! Harness configuration.

use anyhow::{Result, anyhow};
use serde::Deserialize;

/// Harness configuration (TOML).
///
/// Missing fields take the defaults below.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HarnessConfig {
    /// Capture a stack trace for every invocation failure, even when
    /// `RUST_BACKTRACE` is unset. Panics are caught either way.
    pub force_backtrace: bool,

    /// Print a stack trace after a runtime error diagnostic.
    pub print_trace: bool,

    /// Truncate printed stack traces beyond this many lines.
    pub trace_limit_lines: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            force_backtrace: true,
            print_trace: true,
            trace_limit_lines: 64,
        }
    }
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<()> {
        if self.trace_limit_lines == 0 {
            return Err(anyhow!("trace_limit_lines must be > 0"));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn parse_str(contents: &str) -> Result<Self> {
        use anyhow::Context;

        let cfg: HarnessConfig = toml::from_str(contents).context("parse harness config")?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let cfg = HarnessConfig::parse_str("").expect("parse");
        assert_eq!(cfg, HarnessConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let cfg = HarnessConfig::parse_str("print_trace = false\n").expect("parse");
        assert!(!cfg.print_trace);
        assert!(cfg.force_backtrace);
        assert_eq!(cfg.trace_limit_lines, 64);
    }

    #[test]
    fn rejects_zero_trace_limit() {
        let err = HarnessConfig::parse_str("trace_limit_lines = 0\n").expect_err("zero");
        assert!(err.to_string().contains("trace_limit_lines"));
    }
}
