//! Shared test setup for the zero ledger crates.
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::Once;

use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod prelude;

static INIT: Once = Once::new();

/// Frames from these crates are hidden from `color-eyre` backtraces, so
/// reports start at the ledger code that failed.
const HIDDEN_FRAME_PREFIXES: &[&str] = &[
    "tokio::",
    "tower::",
    "futures_util::",
    "proptest::",
    "std::",
    "core::",
    "test::",
];

/// Installs the tracing subscriber and the `color-eyre` report hooks.
///
/// Call this at the start of every test. Only the first call has any effect.
///
/// Logs are filtered by `RUST_LOG`. Without it, only warnings are shown, and
/// verifier rejections (which many tests expect) are hidden.
pub fn init() {
    INIT.call_once(|| {
        let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("warn,zero_consensus=error,zero_state=error")
        });

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt::layer().with_target(false).with_test_writer())
            .with(ErrorLayer::default())
            .init();

        color_eyre::config::HookBuilder::default()
            .add_frame_filter(Box::new(|frames| {
                frames.retain(|frame| match frame.name.as_ref() {
                    Some(name) => !HIDDEN_FRAME_PREFIXES
                        .iter()
                        .any(|prefix| name.trim_start_matches('<').starts_with(prefix)),
                    None => true,
                });
            }))
            .install()
            .expect("color-eyre hooks are only installed once");
    })
}
