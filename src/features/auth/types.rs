//! Form input and wire types for the auth API. Payloads carry raw credentials
//! and must never be logged.

use serde::{Deserialize, Serialize};

/// Raw field values read from the form signals at submit time. Values are
/// captured fresh on every submission and discarded afterwards.
#[derive(Clone, Debug, Default)]
pub struct FormInput {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub terms_accepted: Option<bool>,
    pub remember_me: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn from_input(input: &FormInput) -> Self {
        Self {
            name: input
                .name
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
            email: input.email.trim().to_string(),
            password: input.password.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "rememberMe")]
    pub remember_me: bool,
}

impl LoginRequest {
    pub fn from_input(input: &FormInput) -> Self {
        Self {
            email: input.email.trim().to_string(),
            password: input.password.clone(),
            remember_me: input.remember_me,
        }
    }
}

/// Success body returned by both auth endpoints. Every field is optional;
/// login responses carry the token, registration responses usually only a
/// message.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSuccess {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifiedUser {
    pub email: String,
    pub name: String,
}

/// Response from the token verification endpoint. The user payload is only
/// present when the token is valid.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(default)]
    pub user: Option<VerifiedUser>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_uses_camel_case_remember_field() {
        let request = LoginRequest {
            email: "user@adoptease.dev".to_string(),
            password: "hunter2!".to_string(),
            remember_me: true,
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains(r#""rememberMe":true"#));
        assert!(!json.contains("remember_me"));
    }

    #[test]
    fn payload_builders_trim_name_and_email_but_not_password() {
        let input = FormInput {
            name: Some("  Ada Lovelace  ".to_string()),
            email: " ada@adoptease.dev ".to_string(),
            password: "  spaced pass  ".to_string(),
            terms_accepted: Some(true),
            remember_me: false,
        };

        let register = RegisterRequest::from_input(&input);
        assert_eq!(register.name, "Ada Lovelace");
        assert_eq!(register.email, "ada@adoptease.dev");
        assert_eq!(register.password, "  spaced pass  ");

        let login = LoginRequest::from_input(&input);
        assert_eq!(login.email, "ada@adoptease.dev");
        assert_eq!(login.password, "  spaced pass  ");
        assert!(!login.remember_me);
    }

    #[test]
    fn auth_success_decodes_with_missing_fields() {
        let minimal: AuthSuccess = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(minimal.message, None);
        assert_eq!(minimal.token, None);

        let full: AuthSuccess = serde_json::from_str(
            r#"{"message":"Login successful","token":"jwt-abc","name":"Ada"}"#,
        )
        .expect("Failed to deserialize");
        assert_eq!(full.token.as_deref(), Some("jwt-abc"));
        assert_eq!(full.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn verify_response_decodes_with_and_without_user() {
        let response: VerifyResponse = serde_json::from_str(
            r#"{"valid":true,"user":{"email":"ada@adoptease.dev","name":"Ada"}}"#,
        )
        .expect("Failed to deserialize");
        assert!(response.valid);
        assert_eq!(response.user.map(|user| user.name).as_deref(), Some("Ada"));

        let rejected: VerifyResponse =
            serde_json::from_str(r#"{"valid":false}"#).expect("Failed to deserialize");
        assert!(!rejected.valid);
        assert_eq!(rejected.user, None);
    }
}
