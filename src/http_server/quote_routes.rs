//! Quote HTTP Routes
//!
//! Endpoints for creating, listing, sampling, and deleting quotes.
//!
//! Three client error kinds stay distinguishable here: validation
//! failure and a malformed id are 400, a missing record is 404.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::model::{Quote, QuoteDraft};
use crate::store::{QuoteStore, StoreError};

// ==================
// Shared State
// ==================

/// Quote state shared across handlers
pub struct QuoteState {
    pub store: QuoteStore,
}

impl QuoteState {
    pub fn new() -> Self {
        Self {
            store: QuoteStore::new(),
        }
    }
}

impl Default for QuoteState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct ListQuotesQuery {
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

// ==================
// Quote Routes
// ==================

/// Create quote routes
pub fn quote_routes(state: Arc<QuoteState>) -> Router {
    Router::new()
        .route("/quotes", get(list_quotes_handler))
        .route("/quotes", post(create_quote_handler))
        .route("/quotes/random", get(random_quote_handler))
        .route("/quotes/:id", delete(delete_quote_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn internal_error(e: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
            code: 500,
        }),
    )
}

// ==================
// Quote Handlers
// ==================

async fn list_quotes_handler(
    State(state): State<Arc<QuoteState>>,
    Query(query): Query<ListQuotesQuery>,
) -> Result<Json<Vec<Quote>>, (StatusCode, Json<ErrorResponse>)> {
    let quotes = match query.author.as_deref() {
        Some(author) => state.store.by_author(author),
        None => state.store.all(),
    }
    .map_err(internal_error)?;

    Ok(Json(quotes))
}

async fn create_quote_handler(
    State(state): State<Arc<QuoteState>>,
    Json(draft): Json<QuoteDraft>,
) -> Result<(StatusCode, Json<Quote>), (StatusCode, Json<ErrorResponse>)> {
    draft.validate().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
                code: 400,
            }),
        )
    })?;

    let quote = state.store.insert(draft).map_err(internal_error)?;

    tracing::info!(id = quote.id, author = %quote.author, "quote created");
    Ok((StatusCode::CREATED, Json(quote)))
}

async fn random_quote_handler(
    State(state): State<Arc<QuoteState>>,
) -> Result<Json<Quote>, (StatusCode, Json<ErrorResponse>)> {
    let quote = state.store.random().map_err(internal_error)?;

    match quote {
        Some(quote) => Ok(Json(quote)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No quotes available".to_string(),
                code: 404,
            }),
        )),
    }
}

async fn delete_quote_handler(
    State(state): State<Arc<QuoteState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let deleted = state.store.delete(id).map_err(internal_error)?;

    if !deleted {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Quote {} not found", id),
                code: 404,
            }),
        ));
    }

    tracing::info!(id, "quote deleted");
    Ok(StatusCode::NO_CONTENT)
}
