use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::models::{Ack, AddBookInput, Book, FoundBook, FoundBooks};
use crate::store::{BookStore, StoreError};

// ============================================================
// Error Handling
// ============================================================

/// Every endpoint answers HTTP 200; outcomes are carried by the `success`
/// flag in the body, so a failure here is a JSON payload rather than an
/// error status code.
fn failure(message: impl Into<String>) -> Response {
    Json(Ack::failure(message)).into_response()
}

/// Log a storage failure server-side and return the sanitized client
/// message. The full error stays in the logs; clients only see the
/// generic text for the operation that failed.
fn store_failure(err: &StoreError, message: &str) -> Response {
    tracing::error!("Store failure: {}", err);
    failure(message)
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Add Book
// ============================================================

pub async fn add_book(
    State(store): State<BookStore>,
    Json(input): Json<AddBookInput>,
) -> Response {
    let book = match input.into_book() {
        Ok(book) => book,
        Err(field) => return failure(format!("Field '{}' is required.", field)),
    };

    match store.append(&book) {
        Ok(()) => Json(Ack::ok()).into_response(),
        Err(StoreError::InvalidField { field }) => failure(format!(
            "Field '{}' must not contain commas or newlines.",
            field
        )),
        Err(err) => store_failure(&err, "Error saving book."),
    }
}

// ============================================================
// Find Book
// ============================================================

/// Query parameters for the exact ISBN + author lookup.
#[derive(Debug, Deserialize)]
pub struct FindByIsbnAuthorQuery {
    pub isbn: Option<String>,
    pub author: Option<String>,
}

pub async fn find_by_isbn_author(
    State(store): State<BookStore>,
    Query(query): Query<FindByIsbnAuthorQuery>,
) -> Response {
    let Some(isbn) = present(&query.isbn) else {
        return failure("Field 'isbn' is required.");
    };
    let Some(author) = present(&query.author) else {
        return failure("Field 'author' is required.");
    };

    match store.find_by_isbn_author(isbn, author) {
        Ok(Some(book)) => Json(FoundBook {
            success: true,
            book: book.to_line(),
        })
        .into_response(),
        Ok(None) => failure("Book not found."),
        Err(err) => store_failure(&err, "Error reading book database."),
    }
}

/// Query parameters for the author scan.
#[derive(Debug, Deserialize)]
pub struct FindByAuthorQuery {
    pub author: Option<String>,
}

pub async fn find_by_author(
    State(store): State<BookStore>,
    Query(query): Query<FindByAuthorQuery>,
) -> Response {
    let Some(author) = present(&query.author) else {
        return failure("Field 'author' is required.");
    };

    match store.find_by_author(author) {
        Ok(books) if books.is_empty() => failure("No books found for this author."),
        Ok(books) => Json(FoundBooks {
            success: true,
            books: books.iter().map(Book::to_line).collect(),
        })
        .into_response(),
        Err(err) => store_failure(&err, "Error reading book database."),
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
