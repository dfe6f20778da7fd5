use serde::{Deserialize, Serialize};

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub name: String,
}

/// Response of `GET /auth/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    /// True while the subscription is unpaid past the cut-off; the shell
    /// shows the paywall instead of the app.
    #[serde(default)]
    pub is_limited: bool,
    #[serde(default)]
    pub subscription_paid_until: Option<String>,
    #[serde(default)]
    pub due_day: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecoverRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// Payload for `POST /auth/profile/request-code`. When the user is also
/// changing their email, the code goes to the new address.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileCodeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_email: Option<String>,
}

/// Payload for `PUT /auth/profile/update`, confirmed with the emailed code.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdateRequest {
    pub code: String,
    pub name: String,
    pub email: String,
    /// Only sent when the user typed a new one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_update_omits_an_unchanged_password() {
        let request = ProfileUpdateRequest {
            code: "123456".into(),
            name: "Ana".into(),
            email: "ana@signo.app".into(),
            password: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["code"], "123456");
    }

    #[test]
    fn code_request_omits_an_unchanged_target() {
        let json = serde_json::to_value(ProfileCodeRequest::default()).unwrap();
        assert!(json.get("target_email").is_none());

        let json = serde_json::to_value(ProfileCodeRequest {
            target_email: Some("nueva@signo.app".into()),
        })
        .unwrap();
        assert_eq!(json["target_email"], "nueva@signo.app");
    }
}
