use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_TRACING: Once = Once::new();

/// Installs the global `fmt` subscriber, writing to stderr.
///
/// `RUST_LOG` overrides the default `bank_ledger=warn` filter. Safe to call
/// more than once.
pub fn init() {
    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("bank_ledger=warn"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .try_init();
    });
}
