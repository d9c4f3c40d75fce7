// lengua-cli: shared utilities for CLI tools.

use std::process;
use std::sync::Arc;

use lengua_core::error::LanguageError;
use lengua_core::priority::Priority;
use lengua_core::rule::{Rule, RuleContext, RuleFactory, RuleSpec};
use lengua_es::Spanish;

/// Rule factory for tools that inspect the profile without checking text.
///
/// Every construction request fails, so rule lists are read from the
/// declarations instead.
#[derive(Debug, Default)]
pub struct DeclarationsOnly;

impl RuleFactory for DeclarationsOnly {
    fn create(
        &self,
        spec: &RuleSpec,
        _ctx: &RuleContext<'_>,
    ) -> Result<Box<dyn Rule>, LanguageError> {
        Err(LanguageError::rule_construction(
            spec.id,
            "rule implementations are not available in command-line tools",
        ))
    }
}

/// Create the Spanish profile used by the CLI tools.
pub fn spanish() -> Spanish {
    Spanish::new(Arc::new(DeclarationsOnly))
}

/// Every entry of the profile's own priority table, highest first. Equal
/// priorities are ordered by id.
pub fn ranked_table(es: &Spanish) -> Vec<(&'static str, Priority)> {
    let mut entries: Vec<_> = es.resolver().table().iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    entries
}

/// Initialise logging from `RUST_LOG`, defaulting to warnings only.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

/// Parse a `--name=VALUE`, `--name VALUE` or `-s VALUE` option from command
/// line args.
///
/// Returns `(value, remaining_args)`. The last occurrence wins. A missing
/// value is reported as an error.
pub fn parse_option(
    args: &[String],
    long: &str,
    short: Option<&str>,
) -> Result<(Option<String>, Vec<String>), String> {
    let flag = format!("--{long}");
    let prefix = format!("--{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if *arg == flag || short == Some(arg.as_str()) {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Fail on any `-`-prefixed argument not listed in `known`.
pub fn reject_unknown_flags(args: &[String], known: &[&str]) -> Result<(), String> {
    match args
        .iter()
        .find(|a| a.starts_with('-') && !known.contains(&a.as_str()))
    {
        Some(flag) => Err(format!("unknown option {flag}")),
        None => Ok(()),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    log::error!("{msg}");
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
