use serde::Deserialize;

/// Error body the backend attaches to non-2xx responses. Both fields are
/// optional; absence falls back to a generic localized message client-side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    /// Some auth endpoints answer with `msg` instead of `error`.
    #[serde(default)]
    pub msg: Option<String>,
}

impl ApiErrorBody {
    /// Best user-facing message present in the body, if any.
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.msg.as_deref())
            .or(self.details.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_error_over_details() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"sin stock","details":"traceback"}"#).unwrap();
        assert_eq!(body.message(), Some("sin stock"));
    }

    #[test]
    fn empty_body_has_no_message() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);
    }
}
