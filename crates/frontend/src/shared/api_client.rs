use contracts::shared::api::{ApiErrorBody, ListEnvelope};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::shared::api_utils::api_url;
use crate::system::auth::context::{use_session, SessionContext};

/// Failure taxonomy for resource calls. `Unauthorized` is handled inside
/// the client (session cleared, guards redirect); `Validation` is rendered
/// inline by the calling form; `Message` is a single alert line.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Unauthorized,
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },
    Message(String),
}

impl ApiError {
    /// Field-keyed validation messages, empty for the other variants.
    pub fn field_errors(&self) -> BTreeMap<String, Vec<String>> {
        match self {
            ApiError::Validation { fields, .. } => fields.clone(),
            _ => BTreeMap::new(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => f.write_str("Session expired"),
            ApiError::Validation { message, .. } => f.write_str(message),
            ApiError::Message(message) => f.write_str(message),
        }
    }
}

/// Typed wrapper around the REST resources. Each call is a single attempt
/// carrying the current bearer token; retries are left to the caller.
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: SessionContext,
}

/// Hook: build a client bound to the ambient session context.
pub fn use_api() -> ApiClient {
    ApiClient::new(use_session())
}

impl ApiClient {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }

    /// `GET {path}`, unwrapping the `{ "data": [...] }` envelope.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let response = self
            .authorize(Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Message(format!("Network error: {}", e)))?;
        let response = self.check(response).await?;

        response
            .json::<ListEnvelope<T>>()
            .await
            .map(|envelope| envelope.data)
            .map_err(|e| ApiError::Message(format!("Failed to parse response: {}", e)))
    }

    /// `POST {path}` with a JSON body. The created record is not consumed;
    /// callers refresh the list instead.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Message(format!("Failed to serialize request: {}", e)))?;
        self.dispatch(request).await
    }

    /// `PATCH {path}` with a JSON body.
    pub async fn patch_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::patch(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Message(format!("Failed to serialize request: {}", e)))?;
        self.dispatch(request).await
    }

    /// `DELETE {path}`.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::delete(&api_url(path)))
            .build()
            .map_err(|e| ApiError::Message(format!("Failed to build request: {}", e)))?;
        self.dispatch(request).await
    }

    /// `POST {path}` with multipart form data (inbound proof upload).
    /// The browser sets the multipart content type itself.
    pub async fn post_multipart(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::post(&api_url(path)))
            .body(form)
            .map_err(|e| ApiError::Message(format!("Failed to build request: {}", e)))?;
        self.dispatch(request).await
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token_untracked() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn dispatch(&self, request: Request) -> Result<(), ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Message(format!("Network error: {}", e)))?;
        self.check(response).await?;
        Ok(())
    }

    /// Map the response status onto the error taxonomy. A 401 from any
    /// call clears the session; the route guards then redirect to login.
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();

        if status == 401 {
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }

        if status == 422 {
            let body = response
                .json::<ApiErrorBody>()
                .await
                .unwrap_or(ApiErrorBody {
                    message: None,
                    data: None,
                });
            return Err(ApiError::Validation {
                message: body
                    .message
                    .unwrap_or_else(|| "Validation failed".to_string()),
                fields: body.data.unwrap_or_default(),
            });
        }

        if !response.ok() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("Server error: {}", status));
            log::error!("request failed ({}): {}", status, message);
            return Err(ApiError::Message(message));
        }

        Ok(response)
    }
}
