use serde::{Deserialize, Serialize};

/// Billing view of a user, `GET /billing/status` and `GET /billing/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default = "default_due_day")]
    pub due_day: u32,
    #[serde(default)]
    pub subscription_paid_until: Option<String>,
    #[serde(default)]
    pub blocked: bool,
}

fn default_due_day() -> u32 {
    8
}

/// Response of `GET /billing/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingStatus {
    pub today: String,
    #[serde(default)]
    pub viewer_is_admin: bool,
    pub user: BillingUser,
}

/// Response of `GET /billing/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingUserList {
    pub users: Vec<BillingUser>,
}

/// Payload for `POST /billing/mark-paid`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarkPaidRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
}

/// Payload for `POST /billing/mark-paid-multiple`.
#[derive(Debug, Clone, Serialize)]
pub struct MarkPaidMultipleRequest {
    pub user_ids: Vec<i64>,
    pub until: String,
}

/// Payload for `POST /billing/block-multiple`.
#[derive(Debug, Clone, Serialize)]
pub struct BlockMultipleRequest {
    pub user_ids: Vec<i64>,
}
