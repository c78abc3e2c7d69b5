use contracts::domain::lending::{Lending, LendingPayload};

use crate::shared::api_client::{ApiClient, ApiError};

pub async fn list(client: &ApiClient) -> Result<Vec<Lending>, ApiError> {
    client.get_list("/lendings").await
}

pub async fn create(client: &ApiClient, payload: &LendingPayload) -> Result<(), ApiError> {
    client.post_json("/lendings", payload).await
}
