use contracts::domain::restoration::{Restoration, RestorationPayload};

use crate::shared::api_client::{ApiClient, ApiError};

pub async fn list(client: &ApiClient) -> Result<Vec<Restoration>, ApiError> {
    client.get_list("/restorations").await
}

pub async fn create(client: &ApiClient, payload: &RestorationPayload) -> Result<(), ApiError> {
    client.post_json("/restorations", payload).await
}

/// Fetch the restoration closing a lending, when the list endpoint did not
/// embed it. The filter may still return several rows on older servers, so
/// the match is checked client-side.
pub async fn find_by_lending(
    client: &ApiClient,
    lending_id: &str,
) -> Result<Option<Restoration>, ApiError> {
    let records: Vec<Restoration> = client
        .get_list(&format!("/restorations?lending_id={}", lending_id))
        .await?;
    Ok(records
        .into_iter()
        .find(|r| r.lending_id.as_deref() == Some(lending_id)))
}
