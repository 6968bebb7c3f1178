//! HTTP API mirroring the original `/words` and `/search` routes

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use vocab_core::{EntryPatch, NewEntry, SortOrder, VocabEntry};
use vocab_index::{Scorer, VectorCache};
use vocab_store::{StoreError, VocabDb};

/// Shared state behind every handler
pub struct AppState {
    db: Mutex<VocabDb>,
    cache: Mutex<VectorCache>,
    scorer: Scorer,
}

impl AppState {
    pub fn new(db: VocabDb, scorer: Scorer) -> Self {
        let cache = VectorCache::new(scorer.config());
        Self {
            db: Mutex::new(db),
            cache: Mutex::new(cache),
            scorer,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let status = match &err {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Invalid(_) => StatusCode::BAD_REQUEST,
            _ => {
                tracing::error!("Storage failure: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(MessageResponse {
                message: self.message,
            }),
        )
            .into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/words", get(handle_list_words).post(handle_create_word))
        .route(
            "/words/:id",
            get(handle_read_word)
                .put(handle_update_word)
                .delete(handle_delete_word),
        )
        .route("/search", get(handle_search_words))
        .layer(Extension(state))
}

pub async fn serve(state: Arc<AppState>, bind: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(wait_for_shutdown(tokio::signal::ctrl_c()))
        .await?;
    Ok(())
}

/// Resolves once `signal` fires, or right away if it could not be installed
async fn wait_for_shutdown(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        tracing::warn!("Failed to listen for ctrl-c: {}", e);
    }
    tracing::info!("Shutting down");
}

pub async fn handle_list_words(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<VocabEntry>>> {
    let order = params
        .sort
        .as_deref()
        .map(SortOrder::parse)
        .unwrap_or_default();
    let entries = state.db.lock().await.list(order)?;
    Ok(Json(entries))
}

pub async fn handle_create_word(
    Extension(state): Extension<Arc<AppState>>,
    Json(new): Json<NewEntry>,
) -> ApiResult<(StatusCode, Json<VocabEntry>)> {
    let entry = state.db.lock().await.insert(new)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn handle_read_word(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<VocabEntry>> {
    let entry = state.db.lock().await.get(&id)?;
    entry
        .map(Json)
        .ok_or_else(|| StoreError::NotFound(id).into())
}

pub async fn handle_update_word(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<EntryPatch>,
) -> ApiResult<Json<VocabEntry>> {
    let entry = state.db.lock().await.update(&id, patch)?;
    state.cache.lock().await.invalidate(&id);
    Ok(Json(entry))
}

pub async fn handle_delete_word(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    if !state.db.lock().await.delete(&id)? {
        return Err(StoreError::NotFound(id).into());
    }
    state.cache.lock().await.invalidate(&id);
    Ok(Json(DeleteResponse {
        message: "Word successfully deleted".to_string(),
        id,
    }))
}

pub async fn handle_search_words(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<VocabEntry>>> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::bad_request("Query parameter \"q\" is required"));
    }

    let entries = state.db.lock().await.all()?;
    let mut cache = state.cache.lock().await;
    cache.retain_ids(entries.iter().map(|e| e.id.as_str()));

    let results = state
        .scorer
        .rank_cached(query, &entries, &mut cache)
        .into_iter()
        .map(|result| result.entry.clone())
        .collect();
    Ok(Json(results))
}
