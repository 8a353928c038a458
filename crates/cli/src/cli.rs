// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format for the translated filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const PREDICATES_HELP: &str = "\
Predicates:
  -fid FID              File with this FID, e.g. 0x200000007:0x1:0x0
  -hsm-state STATE      HSM state bit set (none, exists, dirty, released,
                        archived, norelease, noarchive, lost)
  -ost INDEX|[SET]      Objects on this OST, or on any OST of a range set
  -expired              Expired now
  -expired-at EPOCH     Expired at this epoch (seconds)
";

const EXAMPLES_HELP: &str = "\
Examples:
  lfind -- -ost [0,4-7]                        Files with objects on OSTs 0, 4..7
  lfind -- -hsm-state released -expired        Released files that expired
  lfind --output json -- -fid 0x200000007:0x1:0x0";

#[derive(Debug, Parser)]
#[command(name = "lfind")]
#[command(about = "Translate Lustre find predicates into a metadata filter")]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = PREDICATES_HELP)]
#[command(after_help = EXAMPLES_HELP)]
pub struct Cli {
    /// Configuration file (default: <config dir>/lfind/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Current time in epoch seconds, used by -expired
    #[arg(long, value_name = "EPOCH", allow_negative_numbers = true)]
    pub now: Option<i64>,

    /// Output format (text, json)
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Predicates and their values
    #[arg(
        value_name = "PREDICATE",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub expression: Vec<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
