// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! contributors-txt-normalize - aliases file migration
//!
//! Converts a legacy list-shaped aliases file to the name-keyed format.

use clap::Parser;
use contributors_txt::cli::{run_normalize, setup_logging, NormalizeCli};

fn main() {
    let cli = NormalizeCli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = run_normalize(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
