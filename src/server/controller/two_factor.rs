use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        two_factor::{
            AuthenticatorSetupDto, EnableTwoFactorDto, RecoveryCodesDto, TwoFactorStatusDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::two_factor::TwoFactorService,
        state::AppState,
    },
};

/// Tag for grouping two-factor endpoints in OpenAPI documentation
pub static TWO_FACTOR_TAG: &str = "two-factor";

/// Get the signed-in user's two-factor status.
///
/// # Access Control
/// - Any signed-in user
///
/// # Returns
/// - `200 OK` - Whether 2FA is on, whether a key exists and how many recovery codes remain
/// - `401 Unauthorized` - Not signed in
#[utoipa::path(
    get,
    path = "/api/account/two-factor",
    tag = TWO_FACTOR_TAG,
    responses(
        (status = 200, description = "Two-factor status", body = TwoFactorStatusDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = TwoFactorService::new(&state.db, &state.email, &state.auth_settings)
        .status(&user)
        .await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// Get the shared key and provisioning URI for an authenticator app.
///
/// A key is generated the first time this is called and reused afterwards.
#[utoipa::path(
    get,
    path = "/api/account/two-factor/authenticator",
    tag = TWO_FACTOR_TAG,
    responses(
        (status = 200, description = "Authenticator setup details", body = AuthenticatorSetupDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_authenticator_setup(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let setup = TwoFactorService::new(&state.db, &state.email, &state.auth_settings)
        .authenticator_setup(&user)
        .await?;

    Ok((StatusCode::OK, Json(setup.into_dto())))
}

/// Turn on two-factor authentication after verifying a code from the authenticator.
///
/// # Returns
/// - `200 OK` - Enabled; the new recovery codes are shown only this once
/// - `400 Bad Request` - No authenticator key set up yet
/// - `401 Unauthorized` - Not signed in or the code did not verify
#[utoipa::path(
    post,
    path = "/api/account/two-factor/enable",
    tag = TWO_FACTOR_TAG,
    request_body = EnableTwoFactorDto,
    responses(
        (status = 200, description = "Two-factor enabled", body = RecoveryCodesDto),
        (status = 400, description = "No authenticator key set up", body = ErrorDto),
        (status = 401, description = "Not signed in or invalid code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn enable(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<EnableTwoFactorDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let codes = TwoFactorService::new(&state.db, &state.email, &state.auth_settings)
        .enable(&user, &payload.code)
        .await?;

    Ok((StatusCode::OK, Json(codes.into_dto())))
}

/// Turn off two-factor authentication. The authenticator key is kept.
#[utoipa::path(
    post,
    path = "/api/account/two-factor/disable",
    tag = TWO_FACTOR_TAG,
    responses(
        (status = 200, description = "Two-factor disabled", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn disable(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    TwoFactorService::new(&state.db, &state.email, &state.auth_settings)
        .disable(&user)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Two-factor authentication has been disabled.")),
    ))
}

/// Replace the authenticator key. Two-factor authentication is turned off until
/// it is enabled again with the new key.
#[utoipa::path(
    post,
    path = "/api/account/two-factor/reset-authenticator",
    tag = TWO_FACTOR_TAG,
    responses(
        (status = 200, description = "Authenticator key reset", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_authenticator(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    TwoFactorService::new(&state.db, &state.email, &state.auth_settings)
        .reset_authenticator(&user)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(
            "Your authenticator app key has been reset, you will need to configure your \
             authenticator app using the new key.",
        )),
    ))
}

/// Replace all recovery codes with a new set.
///
/// # Returns
/// - `200 OK` - New recovery codes, shown only this once
/// - `400 Bad Request` - Two-factor authentication is not enabled
#[utoipa::path(
    post,
    path = "/api/account/two-factor/recovery-codes",
    tag = TWO_FACTOR_TAG,
    responses(
        (status = 200, description = "New recovery codes", body = RecoveryCodesDto),
        (status = 400, description = "Two-factor authentication is not enabled", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn regenerate_recovery_codes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let codes = TwoFactorService::new(&state.db, &state.email, &state.auth_settings)
        .regenerate_recovery_codes(&user)
        .await?;

    Ok((StatusCode::OK, Json(codes.into_dto())))
}
