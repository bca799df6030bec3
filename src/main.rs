// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! contributors-txt - CONTRIBUTORS.txt generator
//!
//! Writes the list of contributors of the current git repository.

use clap::Parser;
use contributors_txt::cli::{run, setup_logging, Cli};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.verbose);

    // Run the CLI
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
