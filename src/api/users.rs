//! User account endpoints

use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult, UserErrorCode},
    models::User,
};

use super::{require_body, require_identifier, ApiBody, ApiJson};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: Option<Uuid>,
}

/// Get a user by their identifier
#[utoipa::path(
    get,
    path = "/account/GetUserById",
    tag = "account",
    params(UserIdQuery),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Missing or empty userId", body = crate::error::ErrorResponse),
        (status = 404, description = "No user found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user_by_id(
    State(state): State<crate::AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<ApiJson<User>> {
    let user_id = require_identifier("userId", query.user_id)?;

    let user = state
        .services
        .users
        .get_user_by_id(user_id)
        .await
        .ok_or_else(|| ApiError::operation(UserErrorCode::NoUserFound, "No user found"))?;
    Ok(ApiJson(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/account/CreateUser",
    tag = "account",
    request_body = User,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Null user body", body = crate::error::ErrorResponse),
        (status = 404, description = "User could not be saved", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    ApiBody(body): ApiBody<User>,
) -> ApiResult<ApiJson<User>> {
    let user = require_body("user", body)?;

    let created = state
        .services
        .users
        .add_user(user)
        .await
        .ok_or_else(|| ApiError::operation(UserErrorCode::ErrorSavingUser, "Error Saving User"))?;
    Ok(ApiJson(created))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/account/UpdateUser",
    tag = "account",
    request_body = User,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Null user body", body = crate::error::ErrorResponse),
        (status = 404, description = "User could not be updated", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    ApiBody(body): ApiBody<User>,
) -> ApiResult<ApiJson<User>> {
    let user = require_body("user", body)?;

    let updated = state
        .services
        .users
        .update_user(user)
        .await
        .ok_or_else(|| {
            ApiError::operation(UserErrorCode::ErrorUpdatingUser, "Error Updating User")
        })?;
    Ok(ApiJson(updated))
}

/// Delete a user (identifier in the request body)
#[utoipa::path(
    delete,
    path = "/account/DeleteUser",
    tag = "account",
    request_body = Uuid,
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Missing or empty userId", body = crate::error::ErrorResponse),
        (status = 404, description = "No user found or delete failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    ApiBody(body): ApiBody<Uuid>,
) -> ApiResult<ApiJson<&'static str>> {
    let user_id = require_identifier("userId", body)?;

    let user = state
        .services
        .users
        .get_user_by_id(user_id)
        .await
        .ok_or_else(|| ApiError::operation(UserErrorCode::NoUserFound, "No user found"))?;

    if state.services.users.delete_user(user).await {
        Ok(ApiJson("User was deleted"))
    } else {
        Err(ApiError::operation(
            UserErrorCode::ErrorDeletingUser,
            "Error Deleting User",
        ))
    }
}
