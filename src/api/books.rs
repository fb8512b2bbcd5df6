//! Book endpoints

use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult, BookErrorCode},
    models::Book,
};

use super::{require_body, require_identifier, ApiBody, ApiJson};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct BookIdQuery {
    pub book_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: Option<Uuid>,
}

/// Get a book by its identifier
#[utoipa::path(
    get,
    path = "/books/GetBookById",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Book found", body = Book),
        (status = 400, description = "Missing or empty bookId", body = crate::error::ErrorResponse),
        (status = 404, description = "No book found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_by_id(
    State(state): State<crate::AppState>,
    Query(query): Query<BookIdQuery>,
) -> ApiResult<ApiJson<Book>> {
    let book_id = require_identifier("bookId", query.book_id)?;

    let book = state
        .services
        .books
        .get_book_by_id(book_id)
        .await
        .ok_or_else(|| ApiError::operation(BookErrorCode::NoBookFound, "No book found"))?;
    Ok(ApiJson(book))
}

/// List the books owned by a user.
///
/// Lives with the book endpoints rather than the account ones: it only
/// retrieves books for a given account, it never touches user data.
#[utoipa::path(
    get,
    path = "/books/GetUserBooks",
    tag = "books",
    params(UserIdQuery),
    responses(
        (status = 200, description = "Books owned by the user", body = [Book]),
        (status = 400, description = "Missing or empty userId", body = crate::error::ErrorResponse),
        (status = 404, description = "No books found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user_books(
    State(state): State<crate::AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<ApiJson<Vec<Book>>> {
    let user_id = require_identifier("userId", query.user_id)?;

    let books = state
        .services
        .books
        .get_books_by_user_id(user_id)
        .await
        .ok_or_else(|| ApiError::operation(BookErrorCode::NoBookFound, "No books found"))?;
    Ok(ApiJson(books))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books/CreateBook",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "Null book body", body = crate::error::ErrorResponse),
        (status = 404, description = "Book could not be saved", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ApiBody(body): ApiBody<Book>,
) -> ApiResult<ApiJson<Book>> {
    let book = require_body("book", body)?;

    let created = state
        .services
        .books
        .add_book(book)
        .await
        .ok_or_else(|| ApiError::operation(BookErrorCode::ErrorSavingBook, "Error Saving Book"))?;
    Ok(ApiJson(created))
}

/// Create a book tied to a user.
///
/// Writes through the book repository directly (stage, commit, re-read the
/// stored row) instead of the service facade — unlike every other endpoint.
/// The asymmetry is inherited behavior, kept deliberately.
#[utoipa::path(
    post,
    path = "/books/CreateUserBook",
    tag = "books",
    params(UserIdQuery),
    request_body = Book,
    responses(
        (status = 200, description = "Book created for the user", body = Book),
        (status = 400, description = "Null body or empty userId", body = crate::error::ErrorResponse),
        (status = 404, description = "Book could not be saved", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user_book(
    State(state): State<crate::AppState>,
    Query(query): Query<UserIdQuery>,
    ApiBody(body): ApiBody<Book>,
) -> ApiResult<ApiJson<Book>> {
    // Body first, then the owner id: validation order is part of the contract
    let mut book = require_body("book", body)?;
    let user_id = require_identifier("userId", query.user_id)?;

    book.user_id = Some(user_id);

    let repository = &state.services.book_repository;
    repository.add(book.clone()).await;
    repository.save_changes().await;

    let created = repository
        .get_book_by_id(book.id)
        .await
        .ok_or_else(|| ApiError::operation(BookErrorCode::ErrorSavingBook, "Error Saving Book"))?;
    Ok(ApiJson(created))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/UpdateBook",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Null book body", body = crate::error::ErrorResponse),
        (status = 404, description = "Book could not be updated", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    ApiBody(body): ApiBody<Book>,
) -> ApiResult<ApiJson<Book>> {
    let book = require_body("book", body)?;

    let updated = state
        .services
        .books
        .update_book(book)
        .await
        .ok_or_else(|| {
            ApiError::operation(BookErrorCode::ErrorUpdatingBook, "Error Updating Book")
        })?;
    Ok(ApiJson(updated))
}

/// Delete a book (identifier in the request body)
#[utoipa::path(
    delete,
    path = "/books/DeleteBook",
    tag = "books",
    request_body = Uuid,
    responses(
        (status = 200, description = "Book deleted"),
        (status = 400, description = "Missing or empty bookId", body = crate::error::ErrorResponse),
        (status = 404, description = "No book found or delete failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    ApiBody(body): ApiBody<Uuid>,
) -> ApiResult<ApiJson<&'static str>> {
    let book_id = require_identifier("bookId", body)?;

    let book = state
        .services
        .books
        .get_book_by_id(book_id)
        .await
        .ok_or_else(|| ApiError::operation(BookErrorCode::NoBookFound, "No book found"))?;

    if state.services.books.delete_book(book).await {
        Ok(ApiJson("Book was deleted"))
    } else {
        Err(ApiError::operation(
            BookErrorCode::ErrorDeletingBook,
            "Error Deleting Book",
        ))
    }
}
