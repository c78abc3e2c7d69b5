use contracts::domain::stuff::{Stuff, StuffPayload};

use crate::shared::api_client::{ApiClient, ApiError};

pub async fn list(client: &ApiClient) -> Result<Vec<Stuff>, ApiError> {
    client.get_list("/stuffs").await
}

pub async fn create(client: &ApiClient, payload: &StuffPayload) -> Result<(), ApiError> {
    client.post_json("/stuffs", payload).await
}

pub async fn update(client: &ApiClient, id: &str, payload: &StuffPayload) -> Result<(), ApiError> {
    client.patch_json(&format!("/stuffs/{}", id), payload).await
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/stuffs/{}", id)).await
}
