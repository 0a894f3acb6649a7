use std::io::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

/// Logs go to stderr; stdout is reserved for the copied content.
pub fn initialize_logger() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("globcopy=info"));

    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("A global logger was already installed");
    }
}
