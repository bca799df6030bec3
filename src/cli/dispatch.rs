// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command execution.

use crate::aliases::{load_aliases, normalize_file};
use crate::config::Settings;
use crate::contributors::create_content;
use crate::error::{Result, ResultExt};
use crate::git::{default_output_path, run_shortlog};

use super::args::{Cli, NormalizeCli};

/// Generate the contributors file.
pub fn run(cli: Cli) -> Result<()> {
    run_with_settings(cli, &Settings::default())
}

/// Generate the contributors file with explicit settings.
pub fn run_with_settings(cli: Cli, settings: &Settings) -> Result<()> {
    tracing::debug!("Running with args: {:?}", cli);

    // Aliases first: a broken aliases file must fail before git runs
    let aliases = load_aliases(cli.aliases.as_deref())?;

    let shortlog = run_shortlog(&settings.shortlog, None)?;
    let content = create_content(
        &shortlog,
        &aliases,
        &cli.aliases_label(),
        &settings.suppression,
    )?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&settings.output_file_name));
    std::fs::write(&output, content).context(format!("Failed to write {}", output.display()))?;

    tracing::info!("Wrote {}", output.display());
    Ok(())
}

/// Convert an aliases file to the normalized format.
pub fn run_normalize(cli: NormalizeCli) -> Result<()> {
    tracing::debug!("Running normalize with args: {:?}", cli);

    normalize_file(&cli.aliases, cli.output_path())?;

    tracing::info!("Wrote {}", cli.output_path().display());
    Ok(())
}
