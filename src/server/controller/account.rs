use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{ChangeEmailDto, ChangePasswordDto, DeleteAccountDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::account::AccountService,
        state::AppState,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

/// Get the signed-in user's profile.
#[utoipa::path(
    get,
    path = "/api/account",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Profile of the signed-in user", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change the signed-in user's password.
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Current password incorrect or new password rejected
/// - `401 Unauthorized` - Not signed in
#[utoipa::path(
    post,
    path = "/api/account/password",
    tag = ACCOUNT_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Incorrect current password or invalid new password", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AccountService::new(&state.db, &state.email, &state.auth_settings)
        .change_password(&user, &payload.current_password, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Your password has been changed.")),
    ))
}

/// Change the signed-in user's email address.
///
/// The new address must be confirmed through the emailed link before the next sign-in.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Invalid or unchanged address
/// - `409 Conflict` - Address belongs to another account
#[utoipa::path(
    post,
    path = "/api/account/email",
    tag = ACCOUNT_TAG,
    request_body = ChangeEmailDto,
    responses(
        (status = 200, description = "Email changed, confirmation sent", body = UserDto),
        (status = 400, description = "Invalid or unchanged email", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_email(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangeEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let updated = AccountService::new(&state.db, &state.email, &state.auth_settings)
        .change_email(&user, &payload.new_email)
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Delete the signed-in user's account and everything they own, then sign out.
#[utoipa::path(
    delete,
    path = "/api/account",
    tag = ACCOUNT_TAG,
    request_body = DeleteAccountDto,
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 400, description = "Incorrect password", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<DeleteAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AccountService::new(&state.db, &state.email, &state.auth_settings)
        .delete_account(&user, &payload.password)
        .await?;

    AuthSession::new(&session).flush().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Your account has been deleted.")),
    ))
}
