//! API handlers for the BookApp REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod users;

use std::convert::Infallible;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// Check that a request identifier is present and not the nil guid.
///
/// Pure; `name` is the wire-level parameter name quoted in the failure
/// message.
pub fn require_identifier(name: &str, id: Option<Uuid>) -> ApiResult<Uuid> {
    match id {
        Some(id) if !id.is_nil() => Ok(id),
        _ => Err(ApiError::Validation(format!(
            "Bad Request. Provide valid {name} guid. Can't be empty guid."
        ))),
    }
}

/// Check that a deserialized request body is present (a JSON `null` body
/// deserializes to `None`).
pub fn require_body<T>(name: &str, body: Option<T>) -> ApiResult<T> {
    body.ok_or_else(|| {
        ApiError::Validation(format!(
            "Bad Request. Provide valid {name} object. Object can't be null."
        ))
    })
}

/// Loose request-body extractor.
///
/// An absent body, a JSON `null`, or a body that fails to deserialize all
/// bind to `None`, so the controllers' null-body check decides the response
/// shape instead of an extractor rejection. Content type is not inspected.
pub struct ApiBody<T>(pub Option<T>);

#[async_trait]
impl<S, T> FromRequest<S> for ApiBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Bytes::from_request(req, state).await {
            Ok(bytes) => serde_json::from_slice::<Option<T>>(&bytes).ok().flatten(),
            Err(_) => None,
        };
        Ok(ApiBody(body))
    }
}

/// Success responder with the fixed JSON conventions: camelCase field names,
/// ISO-8601 UTC dates, nulls omitted (all from the model serde attributes)
/// and indented output.
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => {
                ([(header::CONTENT_TYPE, "application/json")], body).into_response()
            }
            Err(err) => ApiError::Internal(err.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use crate::models::Book;

    #[test]
    fn nil_guid_is_rejected() {
        let err = require_identifier("bookId", Some(Uuid::nil())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad Request. Provide valid bookId guid. Can't be empty guid."
        );
    }

    #[test]
    fn absent_guid_is_rejected() {
        assert!(require_identifier("userId", None).is_err());
    }

    #[test]
    fn well_formed_guid_passes() {
        let id = Uuid::new_v4();
        assert_eq!(require_identifier("bookId", Some(id)).unwrap(), id);
    }

    #[test]
    fn null_body_is_rejected() {
        let err = require_body::<Book>("book", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad Request. Provide valid book object. Object can't be null."
        );
    }

    #[tokio::test]
    async fn absent_body_binds_to_none() {
        let request = Request::builder().body(Body::empty()).unwrap();
        let ApiBody(body) = ApiBody::<Book>::from_request(request, &()).await.unwrap();
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn malformed_body_binds_to_none() {
        let request = Request::builder().body(Body::from("{not json")).unwrap();
        let ApiBody(body) = ApiBody::<Book>::from_request(request, &()).await.unwrap();
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn well_formed_body_binds_without_a_content_type() {
        let request = Request::builder()
            .body(Body::from("\"a3bb4db4-d8c9-4d36-8a4f-33b7b0cf1a28\""))
            .unwrap();
        let ApiBody(body) = ApiBody::<Uuid>::from_request(request, &()).await.unwrap();
        assert_eq!(
            body,
            Some(Uuid::parse_str("a3bb4db4-d8c9-4d36-8a4f-33b7b0cf1a28").unwrap())
        );
    }
}
