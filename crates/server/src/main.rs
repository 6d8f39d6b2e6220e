use std::{net::SocketAddr, sync::Arc};

use axum::{body::Bytes, extract::State, http::StatusCode, routing::get, Json, Router};
use shared::error::validate_title;
use storage::MovieStore;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};

mod config;

use config::load_settings;

#[derive(Clone)]
struct AppState {
    store: MovieStore,
}

const MAX_TITLE_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let state = AppState {
        store: MovieStore::new(),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .layer(RequestBodyLimitLayer::new(MAX_TITLE_BYTES))
        .with_state(state)
}

async fn list_movies(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    let titles = state.store.list().await;
    info!(count = titles.len(), "received movie list request");
    Json(titles)
}

async fn create_movie(State(state): State<Arc<AppState>>, body: Bytes) -> StatusCode {
    let movie_name = match std::str::from_utf8(&body) {
        Ok(text) => text,
        Err(_) => {
            warn!("received movie submission with non-utf8 body");
            return StatusCode::BAD_REQUEST;
        }
    };

    match validate_title(movie_name) {
        Ok(title) => {
            state.store.append(title).await;
            info!(%title, "stored movie");
            StatusCode::CREATED
        }
        Err(error) => {
            warn!(%error, "rejected movie submission");
            StatusCode::BAD_REQUEST
        }
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
