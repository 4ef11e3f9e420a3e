//! Tracing setup for the CLI.
//!
//! Structured diagnostics go through `tracing`; the two user-facing
//! progress lines stay on plain stdout because they are part of the tool's
//! output contract rather than log output.

use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise verbose mode enables debug-level
/// events for this crate. The format is compact in both modes.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("phone_backfill=debug,info")
            } else {
                EnvFilter::try_new("phone_backfill=info,warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent_enough_for_tests() {
        // A second call fails because the global subscriber is already set;
        // both outcomes are fine here.
        let first = init_tracing(false);
        let second = init_tracing(true);
        assert!(first.is_ok() || second.is_err());
    }
}
