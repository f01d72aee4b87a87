//! Harness configuration merging.
//!
//! Applies case-specific overrides to the default harness configuration.

use anyhow::Result;
use harness::HarnessConfig;

use crate::case::CaseConfig;

/// Apply case configuration overrides to the base harness config.
pub fn apply_case_config(mut base: HarnessConfig, overrides: &CaseConfig) -> Result<HarnessConfig> {
    if let Some(force_backtrace) = overrides.force_backtrace {
        base.force_backtrace = force_backtrace;
    }
    if let Some(print_trace) = overrides.print_trace {
        base.print_trace = print_trace;
    }
    if let Some(trace_limit_lines) = overrides.trace_limit_lines {
        base.trace_limit_lines = trace_limit_lines;
    }
    base.validate()?;
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overrides_keeps_base() {
        let base = HarnessConfig::default();
        let merged = apply_case_config(base.clone(), &CaseConfig::default()).expect("merge");
        assert_eq!(merged, base);
    }

    #[test]
    fn applies_overrides() {
        let overrides = CaseConfig {
            force_backtrace: None,
            print_trace: Some(false),
            trace_limit_lines: Some(8),
        };
        let merged = apply_case_config(HarnessConfig::default(), &overrides).expect("merge");
        assert!(merged.force_backtrace);
        assert!(!merged.print_trace);
        assert_eq!(merged.trace_limit_lines, 8);
    }
}
