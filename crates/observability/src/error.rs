use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObservabilityError {
    /// `RUST_LOG` or the default filter did not parse.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed.
    #[error("tracing subscriber already initialized: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}
