//! Opt-in log output for hosts embedding `fretboard-rs`.
//!
//! The engine emits `tracing` events for fingering edits, presses and
//! rejected input; nothing is printed until a subscriber is installed.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` only `warn` and above are shown, which surfaces rejected
/// fingerings, windows and presses. Returns `false` when the `telemetry`
/// feature is off or the host already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
