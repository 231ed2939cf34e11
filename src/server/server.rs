//! HTTP server: configuration, routing and the serve loop.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::routing::{get, get_service, post, put};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::data::{JsonFileStore, QuestionStore};
use crate::protocol::DEFAULT_PORT;

use super::handlers;
use super::state::AppState;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Path of the JSON question store.
    pub questions_path: PathBuf,
    /// Directory holding `index.html`, `admin.html` and `js/`.
    pub static_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            questions_path: PathBuf::from("questions.json"),
            static_root: PathBuf::from("."),
        }
    }
}

/// Build the full application router over `store`.
///
/// Static pages come from `static_root`; everything under `/api` goes
/// through the store.
pub fn router(store: Arc<dyn QuestionStore>, static_root: &Path) -> Router {
    let state = Arc::new(AppState::new(store));

    let api = Router::new()
        .route("/questions", get(handlers::list_questions))
        .route("/questions/{attending_id}", post(handlers::add_question))
        .route(
            "/questions/{attending_id}/catchphrases",
            put(handlers::update_catchphrases),
        )
        .route(
            "/questions/{attending_id}/{question_id}",
            put(handlers::update_question).delete(handlers::delete_question),
        )
        .with_state(state);

    Router::new()
        .route(
            "/",
            get_service(ServeFile::new(static_root.join("index.html"))),
        )
        .route(
            "/admin",
            get_service(ServeFile::new(static_root.join("admin.html"))),
        )
        .nest_service("/js", ServeDir::new(static_root.join("js")))
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    store: Arc<dyn QuestionStore>,
}

impl Server {
    /// Creates a server backed by the JSON file named in `config`.
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(JsonFileStore::new(&config.questions_path));
        Self::with_store(config, store)
    }

    /// Creates a server backed by any store implementation.
    pub fn with_store(config: ServerConfig, store: Arc<dyn QuestionStore>) -> Self {
        Self { config, store }
    }

    /// Runs the server until Ctrl+C or SIGTERM.
    pub async fn run(self) -> std::io::Result<()> {
        // The store is re-read on every request, so a broken file here is
        // only worth a warning.
        match self.store.load().await {
            Ok(data) => tracing::info!(
                attendings = data.attendings.len(),
                questions = data.question_count(),
                "Question store loaded"
            ),
            Err(e) => tracing::warn!(error = %e, "Question store is not readable"),
        }

        let app = router(Arc::clone(&self.store), &self.config.static_root);

        let listener = tokio::net::TcpListener::bind(self.config.addr).await?;
        tracing::info!(
            addr = %self.config.addr,
            static_root = %self.config.static_root.display(),
            "Server listening"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
