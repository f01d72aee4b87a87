//! CLI command implementations.

use std::io;

use anyhow::{Context, Result};
use harness::{HarnessConfig, report};
use tracing::{debug, info};

use crate::case::{builtin_cases, find_case};
use crate::challenges;
use crate::config::apply_case_config;

/// List all built-in cases.
pub fn list_cases() -> Result<()> {
    for case in builtin_cases()? {
        println!("{}", case.case.id);
    }
    Ok(())
}

/// Run a built-in case once and return the process exit code.
pub fn run_case_by_id(case_id: &str) -> Result<i32> {
    let case = find_case(case_id)?;
    let config =
        apply_case_config(HarnessConfig::default(), &case.config).context("apply case config")?;
    let challenge = challenges::lookup(&case.case.challenge)
        .with_context(|| format!("challenge {} not registered", case.case.challenge))?;
    let mut args = case.sample_args().context("prepare sample arguments")?;
    debug!(case_id, challenge = %case.case.challenge, arg_count = args.len(), "case loaded");

    let code = report::run(
        challenge.as_ref(),
        &mut args,
        &config,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    info!(case_id, code, "case finished");
    Ok(code)
}
