use nakayama::{parse_modules, Module, NakayamaAlgebra};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Log to stderr, filtered by `RUST_LOG` (default `warn`). Spans report when they close, which
/// gives the time spent building graphs and enumerating classes.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}

/// Parse a list of modules of `algebra` given in either notation.
pub fn parse_algebra_modules(algebra: &NakayamaAlgebra, input: &str) -> anyhow::Result<Vec<Module>> {
    Ok(parse_modules(input, Some(algebra.n()), Some(algebra.l()))?)
}
