use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "checkmate=debug";

/// Installs the `tracing` subscriber used by the message macros in debug mode.
///
/// Does nothing in normal mode. Calling it twice is harmless: the second
/// `try_init` fails and is ignored.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
