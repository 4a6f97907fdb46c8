use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{
            ConfirmEmailDto, EmailDto, LoginDto, LoginResponseDto, RecoveryCodeLoginDto,
            RegisterDto, ResetPasswordDto, TwoFactorLoginDto, UserDto,
        },
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, TwoFactorSession},
        },
        model::user::User,
        service::auth::{AuthService, LoginOutcome, RegisterParams},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates an unconfirmed user and emails a confirmation link. Supplying the admin
/// bootstrap code printed at startup makes the new user an admin.
///
/// # Arguments
/// - `state` - Application state containing the database, email and admin code services
/// - `payload` - Username, email, password and optional admin code
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - A field failed validation
/// - `409 Conflict` - Username or email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Username or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.email, &state.auth_settings);

    let user = service
        .register(
            RegisterParams {
                username: payload.username,
                email: payload.email,
                password: payload.password,
                admin_code: payload.admin_code,
            },
            &state.admin_code_service,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Confirm an email address with the token from the confirmation email.
///
/// # Returns
/// - `200 OK` - Email confirmed
/// - `400 Bad Request` - Token invalid, used or expired
#[utoipa::path(
    post,
    path = "/api/auth/confirm-email",
    tag = AUTH_TAG,
    request_body = ConfirmEmailDto,
    responses(
        (status = 200, description = "Email confirmed", body = MessageDto),
        (status = 400, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_email(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.email, &state.auth_settings)
        .confirm_email(payload.user_id, &payload.token)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Thank you for confirming your email.")),
    ))
}

/// Send a new confirmation email.
///
/// Always answers 200 so the endpoint cannot be used to discover registered addresses.
#[utoipa::path(
    post,
    path = "/api/auth/resend-confirmation",
    tag = AUTH_TAG,
    request_body = EmailDto,
    responses(
        (status = 200, description = "Confirmation email sent if the account needs one", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resend_confirmation(
    State(state): State<AppState>,
    Json(payload): Json<EmailDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.email, &state.auth_settings)
        .resend_confirmation(&payload.email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(
            "Verification email sent. Please check your email.",
        )),
    ))
}

/// Sign in with a username or email and a password.
///
/// When the account has two-factor authentication enabled, the user is remembered
/// as pending in the session and must finish with `/api/auth/login/2fa` or
/// `/api/auth/login/recovery`.
///
/// # Arguments
/// - `state` - Application state
/// - `session` - Session the signed-in user is stored in
/// - `payload` - Login (username or email) and password
///
/// # Returns
/// - `200 OK` - Signed in, or a second factor is required
/// - `401 Unauthorized` - Invalid login attempt
/// - `403 Forbidden` - Email address not confirmed
/// - `423 Locked` - Too many failed attempts
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in or second factor required", body = LoginResponseDto),
        (status = 401, description = "Invalid login attempt", body = ErrorDto),
        (status = 403, description = "Email address not confirmed", body = ErrorDto),
        (status = 423, description = "Account locked out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = AuthService::new(&state.db, &state.email, &state.auth_settings)
        .login(&payload.login, &payload.password)
        .await?;

    let response = match outcome {
        LoginOutcome::TwoFactorRequired(user_id) => {
            TwoFactorSession::new(&session)
                .set_pending_user(user_id)
                .await?;

            LoginResponseDto {
                two_factor_required: true,
                user: None,
            }
        }
        LoginOutcome::SignedIn(user) => {
            sign_in(&session, &user).await?;

            LoginResponseDto {
                two_factor_required: false,
                user: Some(user.into_dto()),
            }
        }
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Finish a pending sign-in with an authenticator code.
///
/// # Returns
/// - `200 OK` - Signed in
/// - `401 Unauthorized` - No pending sign-in or invalid code
/// - `423 Locked` - Too many failed attempts
#[utoipa::path(
    post,
    path = "/api/auth/login/2fa",
    tag = AUTH_TAG,
    request_body = TwoFactorLoginDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 401, description = "No pending sign-in or invalid code", body = ErrorDto),
        (status = 423, description = "Account locked out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_with_2fa(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TwoFactorLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = pending_user(&session).await?;

    let user = AuthService::new(&state.db, &state.email, &state.auth_settings)
        .login_with_2fa(user_id, &payload.code)
        .await?;

    sign_in(&session, &user).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Finish a pending sign-in with a one-time recovery code.
///
/// # Returns
/// - `200 OK` - Signed in; the recovery code is used up
/// - `401 Unauthorized` - No pending sign-in or invalid recovery code
#[utoipa::path(
    post,
    path = "/api/auth/login/recovery",
    tag = AUTH_TAG,
    request_body = RecoveryCodeLoginDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 401, description = "No pending sign-in or invalid recovery code", body = ErrorDto),
        (status = 423, description = "Account locked out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_with_recovery_code(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RecoveryCodeLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = pending_user(&session).await?;

    let user = AuthService::new(&state.db, &state.email, &state.auth_settings)
        .login_with_recovery_code(user_id, &payload.recovery_code)
        .await?;

    sign_in(&session, &user).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Sign out and discard the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).flush().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Signed out."))))
}

/// Email a password reset link.
///
/// Always answers 200 so the endpoint cannot be used to discover registered addresses.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = AUTH_TAG,
    request_body = EmailDto,
    responses(
        (status = 200, description = "Reset email sent if the account exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<EmailDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.email, &state.auth_settings)
        .forgot_password(&payload.email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(
            "Please check your email to reset your password.",
        )),
    ))
}

/// Set a new password with the token from the reset email.
///
/// # Returns
/// - `200 OK` - Password reset
/// - `400 Bad Request` - Token invalid or new password rejected
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = MessageDto),
        (status = 400, description = "Invalid token or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.email, &state.auth_settings)
        .reset_password(&payload.email, &payload.token, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Your password has been reset.")),
    ))
}

/// Get the signed-in user.
///
/// # Access Control
/// - Any signed-in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The signed-in user", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Stores the user in a fresh session id, dropping any pending second factor.
async fn sign_in(session: &Session, user: &User) -> Result<(), AppError> {
    let auth_session = AuthSession::new(session);

    TwoFactorSession::new(session).take_pending_user().await?;
    auth_session.cycle_id().await?;
    auth_session.set_user_id(user.id).await?;

    Ok(())
}

async fn pending_user(session: &Session) -> Result<i32, AppError> {
    TwoFactorSession::new(session)
        .get_pending_user()
        .await?
        .ok_or_else(|| AuthError::TwoFactorNotPending.into())
}
