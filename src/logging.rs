use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

const VERBOSE_DIRECTIVE: &str = "haa=debug";

/// Install the stderr diagnostics subscriber. Stdout is reserved for results.
///
/// `RUST_LOG` sets the base filter (default `warn`); `--verbose` always adds
/// `haa=debug` on top of it. Request diagnostics are emitted only when the
/// connection is verbose, so `RUST_LOG` alone does not turn them on.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

fn build_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if !verbose {
        return filter;
    }
    match VERBOSE_DIRECTIVE.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}
