//! SSR host for the grading dashboard.
//!
//! Renders the Leptos app on the server and serves the hydrate bundle from
//! `/pkg`. The grading API is a separate service reached by the browser at
//! the configured API base.

mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = match std::env::var("PORT") {
        Ok(raw) => match raw.parse() {
            Ok(port) => port,
            Err(e) => {
                tracing::error!(%raw, error = %e, "invalid PORT");
                std::process::exit(2);
            }
        },
        Err(_) => 3000,
    };

    let app = match routes::app() {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%port, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%port, "docgrade host listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
    }
}
