//! Built-in sample cases.
//!
//! A case names a challenge body and the fixed arguments to call its
//! `solution` with. Cases are TOML documents compiled into the binary from
//! `scratch/cases/`, so a run reads no files.

use anyhow::{Context, Result, anyhow, bail};
use harness::Arg;
use serde::Deserialize;

use crate::challenges;

/// Embedded case documents, keyed by file stem.
const BUILTIN: &[(&str, &str)] = &[
    ("binary-search", include_str!("../cases/binary-search.toml")),
    (
        "longest-unique-substring",
        include_str!("../cases/longest-unique-substring.toml"),
    ),
    ("max-subarray", include_str!("../cases/max-subarray.toml")),
    (
        "max-subarray-empty",
        include_str!("../cases/max-subarray-empty.toml"),
    ),
    ("placeholder", include_str!("../cases/placeholder.toml")),
    ("reverse-string", include_str!("../cases/reverse-string.toml")),
    ("two-sum", include_str!("../cases/two-sum.toml")),
    ("two-sum-mismatch", include_str!("../cases/two-sum-mismatch.toml")),
    ("valid-palindrome", include_str!("../cases/valid-palindrome.toml")),
];

/// A parsed case: target challenge, config overrides, sample arguments.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CaseFile {
    pub case: CaseMeta,
    #[serde(default)]
    pub config: CaseConfig,
    #[serde(default)]
    pub args: Vec<CaseArg>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseMeta {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    /// Name of the challenge body, see [`challenges::NAMES`].
    pub challenge: String,
}

/// Harness configuration overrides for the case.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CaseConfig {
    pub force_backtrace: Option<bool>,
    pub print_trace: Option<bool>,
    pub trace_limit_lines: Option<usize>,
}

/// One positional sample argument. `name` is informational.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CaseArg {
    pub name: String,
    pub value: toml::Value,
}

impl CaseFile {
    pub fn parse_str(contents: &str) -> Result<Self> {
        let case: CaseFile = toml::from_str(contents).context("parse case")?;
        case.validate()?;
        Ok(case)
    }

    /// Convert the declared arguments, in order.
    pub fn sample_args(&self) -> Result<Vec<Arg>> {
        self.args
            .iter()
            .enumerate()
            .map(|(index, arg)| {
                Arg::from_toml(&arg.value)
                    .with_context(|| format!("args[{}] ({}) invalid", index, arg.name))
            })
            .collect()
    }

    fn validate(&self) -> Result<()> {
        validate_case_id(&self.case.id)?;
        if challenges::lookup(&self.case.challenge).is_none() {
            bail!(
                "case.challenge {} is not a known challenge (one of: {})",
                self.case.challenge,
                challenges::NAMES.join(", ")
            );
        }
        if let Some(limit) = self.config.trace_limit_lines
            && limit == 0
        {
            bail!("config.trace_limit_lines must be > 0");
        }
        for (index, arg) in self.args.iter().enumerate() {
            if arg.name.trim().is_empty() {
                bail!("args[{}].name must be non-empty", index);
            }
            if self.args[..index].iter().any(|prior| prior.name == arg.name) {
                bail!("duplicate argument name {}", arg.name);
            }
        }
        self.sample_args()?;
        Ok(())
    }
}

/// Load every built-in case, sorted by id.
///
/// Errors if a document is invalid, its id disagrees with its file name, or
/// two cases share an id.
pub fn builtin_cases() -> Result<Vec<CaseFile>> {
    let mut cases = Vec::with_capacity(BUILTIN.len());
    for (stem, contents) in BUILTIN {
        let case =
            CaseFile::parse_str(contents).with_context(|| format!("load case {stem}.toml"))?;
        if case.case.id != *stem {
            bail!("case {stem}.toml declares id {}", case.case.id);
        }
        cases.push(case);
    }
    cases.sort_by(|left, right| left.case.id.cmp(&right.case.id));
    for pair in cases.windows(2) {
        if pair[0].case.id == pair[1].case.id {
            return Err(anyhow!("duplicate case.id {}", pair[0].case.id));
        }
    }
    Ok(cases)
}

/// Find a built-in case by id.
pub fn find_case(case_id: &str) -> Result<CaseFile> {
    builtin_cases()?
        .into_iter()
        .find(|case| case.case.id == case_id)
        .ok_or_else(|| anyhow!("case {} not found", case_id))
}

fn validate_case_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("case.id must be non-empty");
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        bail!("case.id must use [a-z0-9_-] only");
    }
    Ok(())
}
