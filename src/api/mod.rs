mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::BookStore;

pub fn create_router(store: BookStore) -> Router {
    Router::new()
        .route("/add-book", post(handlers::add_book))
        .route("/find-by-isbn-author", get(handlers::find_by_isbn_author))
        .route("/find-by-author", get(handlers::find_by_author))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
