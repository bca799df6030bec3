// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// contributors-txt - CONTRIBUTORS.txt generator
///
/// Lists the contributors of the current git repository, merging the
/// identities declared in an aliases file.
#[derive(Parser, Debug)]
#[command(name = "contributors-txt")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Create a file listing the contributors of a git repository", long_about = None)]
pub struct Cli {
    /// The path to the aliases file
    #[arg(short, long)]
    pub aliases: Option<PathBuf>,

    /// Where to output the contributor list [default: CONTRIBUTORS.txt at the repository root]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// contributors-txt-normalize - aliases file migration
///
/// Rewrites an aliases file in the name-keyed format. Running it on its own
/// output changes nothing.
#[derive(Parser, Debug)]
#[command(name = "contributors-txt-normalize")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Convert an aliases file to the normalized format", long_about = None)]
pub struct NormalizeCli {
    /// The path to the aliases file to convert
    #[arg(short, long)]
    pub aliases: PathBuf,

    /// Where to write the converted file [default: overwrite the aliases file]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Label identifying the aliases file in the generated header.
    pub fn aliases_label(&self) -> String {
        self.aliases
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "no aliases file".to_string())
    }
}

impl NormalizeCli {
    /// Destination of the converted file.
    pub fn output_path(&self) -> &PathBuf {
        self.output.as_ref().unwrap_or(&self.aliases)
    }
}
