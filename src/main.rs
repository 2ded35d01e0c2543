#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use crate::error::HostError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "explorer host stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    let port = config::port_from_env(std::env::var("PORT").ok().as_deref())?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(HostError::Bind)?;

    tracing::info!(%port, "explorer host listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
