use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, borrow_book, list_book_records, list_customer_records, return_book,
};

/// Creates the API router
///
/// - POST /books/:id/borrow - Borrow a copy
/// - POST /books/:id/return - Return a copy
/// - GET /books/:id/records - Borrow/return history of a book
/// - GET /customers/:name/records - Borrow/return history of a customer
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/books/:id/borrow", post(borrow_book))
        .route("/books/:id/return", post(return_book))
        .route("/books/:id/records", get(list_book_records))
        .route("/customers/:name/records", get(list_customer_records))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
