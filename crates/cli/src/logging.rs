//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber from the `-v` count: warnings by
/// default, `-v` info, `-vv` debug. `RUST_LOG` overrides the default.
/// Diagnostics go to stderr so tables and URLs stay pipeable.
pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "onepay=info,onepay_cli=info",
        _ => "onepay=debug,onepay_cli=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
