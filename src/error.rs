//! Host startup and serve errors.

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
