//! HTTP server for the notes API.
//!
//! # Endpoints
//!
//! - `GET /notes?query=` - List notes, optionally filtered by a substring
//! - `GET /notes/:id` - Get a note
//! - `POST /notes` - Create a note
//! - `PUT /notes/:id` - Partially update a note
//! - `DELETE /notes/:id` - Delete a note
//! - `GET /health` - Health check
//!
//! All handlers share one [`NoteStore`] through [`AppState`].

mod error;
mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::NoteStore;

pub use error::ErrorBody;
pub use handlers::{HealthStatus, ListQuery};

/// State shared by all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The note store.
    pub store: Arc<NoteStore>,
}

impl AppState {
    /// Wrap a store for use by the router.
    #[must_use]
    pub fn new(store: Arc<NoteStore>) -> Self {
        Self { store }
    }
}

/// Build the application router.
///
/// When `cors_enabled` is set, cross-origin requests are allowed from any
/// origin.
#[must_use]
pub fn router(state: AppState, cors_enabled: bool) -> Router {
    let router = Router::new()
        .route("/notes", get(handlers::list_notes).post(handlers::create_note))
        .route(
            "/notes/:id",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Start the HTTP server and run until a shutdown signal arrives.
///
/// A fresh, empty [`NoteStore`] is created for the lifetime of the server.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn serve(config: &Config) -> Result<()> {
    let store = Arc::new(NoteStore::with_title_preview(config.notes.title_preview_chars));
    let app = router(AppState::new(store), config.server.cors_enabled);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| Error::ServerBind {
            addr: addr.clone(),
            source,
        })?;

    info!("Notes API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when Ctrl+C (or SIGTERM on Unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
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
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
