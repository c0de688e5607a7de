// logging.rs

//! Diagnostics go to stderr so they never mix with rendered history on
//! stdout. Quiet (`warn`) unless `RUST_LOG` says otherwise:
//!
//! ```bash
//! RUST_LOG=calclist=debug calclist
//! ```

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs the global subscriber. Only the first call has any effect.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
