// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lfind - translate Lustre find predicates into a metadata filter.
//!
//! This crate provides the `lfind` binary: it loads the field mapping from
//! the user's configuration, resolves "now", hands the predicates to
//! [`lfind_core::translate`] and prints the resulting filter tree.

mod cli;
pub mod config;
pub mod env;
pub mod error;

pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use std::io::Write;

use lfind_core::{translate, Context, FilterExpr};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber, honoring `RUST_LOG` (default `warn`).
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the command line and print the translated filter on stdout.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?;
    let now = resolve_now(cli.now, env::now())?;
    debug!(now, "resolved current time");

    let ctx = Context::new(config.fields, now);
    let filter = translate(cli.expression.as_slice(), &ctx)?;
    match &filter {
        Some(expr) => debug!(
            predicates = ?cli.expression,
            leaves = expr.leaf_count(),
            "translated expression"
        ),
        None => debug!("no predicates, matching everything"),
    }

    let output = render(filter.as_ref(), cli.output)?;
    write_output(&mut std::io::stdout().lock(), &output)
}

/// Write rendered output followed by a newline; empty output writes nothing.
pub fn write_output(out: &mut impl Write, output: &str) -> Result<()> {
    if output.is_empty() {
        return Ok(());
    }
    writeln!(out, "{output}")?;
    out.flush()?;
    Ok(())
}

/// Pick "now": the `--now` flag, then `LFIND_NOW`, then the system clock.
pub fn resolve_now(flag: Option<i64>, env_value: Option<String>) -> Result<i64> {
    if let Some(now) = flag {
        return Ok(now);
    }
    let Some(value) = env_value else {
        return Ok(chrono::Utc::now().timestamp());
    };
    let parsed = value.trim().parse::<i64>();
    parsed.map_err(|source| Error::InvalidNow { value, source })
}

/// Render a filter; `None` is empty text or JSON `null`.
pub fn render(filter: Option<&FilterExpr>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(filter.map(ToString::to_string).unwrap_or_default()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&filter)?),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
