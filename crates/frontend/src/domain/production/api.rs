use contracts::domain::production::{ProductionPayload, ProductionSummary};

use crate::shared::api::{Api, ApiError};

pub async fn create(api: &Api, payload: &ProductionPayload) -> Result<ProductionSummary, ApiError> {
    api.post_json("/productions", payload).await
}
