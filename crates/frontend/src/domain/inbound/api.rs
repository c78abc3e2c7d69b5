use contracts::domain::inbound::InboundStuff;
use web_sys::{File, FormData};

use crate::shared::api_client::{ApiClient, ApiError};

pub async fn list(client: &ApiClient) -> Result<Vec<InboundStuff>, ApiError> {
    client.get_list("/inbound-stuffs").await
}

/// Record a stock receipt. Sent as multipart because of the proof upload;
/// the file part is optional.
pub async fn create(
    client: &ApiClient,
    stuff_id: &str,
    total: i64,
    proof: Option<File>,
) -> Result<(), ApiError> {
    let form = FormData::new()
        .map_err(|e| ApiError::Message(format!("Failed to build form: {:?}", e)))?;
    form.append_with_str("stuff_id", stuff_id)
        .map_err(|e| ApiError::Message(format!("Failed to build form: {:?}", e)))?;
    form.append_with_str("total", &total.to_string())
        .map_err(|e| ApiError::Message(format!("Failed to build form: {:?}", e)))?;
    if let Some(file) = proof {
        form.append_with_blob_and_filename("proof_file", &file, &file.name())
            .map_err(|e| ApiError::Message(format!("Failed to attach file: {:?}", e)))?;
    }

    client.post_multipart("/inbound-stuffs", form).await
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/inbound-stuffs/{}", id)).await
}
