use contracts::shared::api::ApiErrorBody;
use contracts::system::auth::{LoginData, LoginEnvelope, LoginRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Login with username and password. The only unauthenticated call in the
/// application; everything else goes through the resource client.
pub async fn login(username: String, password: String) -> Result<LoginData, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Login failed: {}", response.status()));
        return Err(message);
    }

    response
        .json::<LoginEnvelope>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
