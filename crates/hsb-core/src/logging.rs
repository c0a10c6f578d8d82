use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing for the watcher.
///
/// Default: info for our crates, warn for everything else. Can be overridden
/// with `RUST_LOG`.
pub fn init(service_name: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,hsb_core=info,{service_name}=info"))
    });

    fmt().with_env_filter(filter).with_ansi(true).init();
}
