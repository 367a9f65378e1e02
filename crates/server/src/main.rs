use std::process::ExitCode;

use server::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    server::telemetry::init_telemetry();
    let config = server::config::load_config();
    server::health::record_start_time();

    let state = AppState::new(config.features.clone());
    let router = server::openapi::api_router(state);

    let listener = match tokio::net::TcpListener::bind(&config.server.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.server.bind_addr, %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(addr = %config.server.bind_addr, "Org admin access server listening");

    match axum::serve(listener, router).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(%e, "Server error");
            ExitCode::FAILURE
        }
    }
}
