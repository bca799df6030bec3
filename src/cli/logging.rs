// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Logging/tracing setup shared by both binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up logging/tracing.
///
/// `verbose` turns on debug output for this crate; otherwise `RUST_LOG`
/// decides, defaulting to warnings.
pub fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_new("contributors_txt=debug,warn")
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if verbose {
        tracing::debug!("contributors-txt {}", crate::version::version_string());
    }
}
