// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use lfind::Cli;

fn main() {
    lfind::setup_logging();
    let cli = Cli::parse();
    if let Err(e) = lfind::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
