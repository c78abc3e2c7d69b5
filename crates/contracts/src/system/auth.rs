use crate::enums::role::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Identity persisted alongside the access token for the lifetime of a
/// session. The token itself is opaque to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub access_token: String,
    pub user: SessionUser,
}

/// The login endpoint wraps its payload as `{ "data": { ... } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginEnvelope {
    pub data: LoginData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_envelope_parses_token_and_user() {
        let env: LoginEnvelope = serde_json::from_str(
            r#"{"data":{"access_token":"tok-123","user":{"id":"u1","username":"budi","email":"budi@example.com","role":"staff"}}}"#,
        )
        .unwrap();
        assert_eq!(env.data.access_token, "tok-123");
        assert_eq!(env.data.user.role, Role::Staff);
        assert_eq!(env.data.user.email.as_deref(), Some("budi@example.com"));
    }
}
