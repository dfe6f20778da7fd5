//! Calls against the `/auth` endpoints.

use contracts::system::auth::{
    LoginRequest, LoginResponse, MeResponse, ProfileCodeRequest, ProfileUpdateRequest,
    RecoverRequest, RegisterRequest, ResetPasswordRequest,
};

use crate::shared::api::{Api, ApiError};

pub async fn login(api: &Api, email: String, password: String) -> Result<LoginResponse, ApiError> {
    api.post_json("/auth/login", &LoginRequest { email, password })
        .await
}

pub async fn register(api: &Api, request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
    api.post_json("/auth/register", request).await
}

/// Request a password-recovery email.
pub async fn recover(api: &Api, email: String) -> Result<serde_json::Value, ApiError> {
    api.post_json("/auth/recover", &RecoverRequest { email }).await
}

/// Set a new password using the code from the recovery email.
pub async fn reset_password(
    api: &Api,
    email: String,
    code: String,
    new_password: String,
) -> Result<serde_json::Value, ApiError> {
    api.post_json(
        "/auth/reset-password",
        &ResetPasswordRequest {
            email,
            code,
            new_password,
        },
    )
    .await
}

/// Profile of the signed-in user, including admin and billing flags.
pub async fn me(api: &Api) -> Result<MeResponse, ApiError> {
    api.get_json("/auth/me").await
}

/// Request the confirmation code for a profile change. Passing a target
/// email sends the code there instead of the current address.
pub async fn request_profile_code(
    api: &Api,
    target_email: Option<String>,
) -> Result<serde_json::Value, ApiError> {
    api.post_json("/auth/profile/request-code", &ProfileCodeRequest { target_email })
        .await
}

/// Apply a profile change confirmed with the emailed code; returns the
/// updated profile.
pub async fn update_profile(
    api: &Api,
    request: &ProfileUpdateRequest,
) -> Result<MeResponse, ApiError> {
    api.put_json("/auth/profile/update", request).await
}

/// Delete the signed-in user's account. Their records stay visible but
/// lose the association with the account.
pub async fn delete_account(api: &Api) -> Result<(), ApiError> {
    api.delete("/auth/profile").await
}
