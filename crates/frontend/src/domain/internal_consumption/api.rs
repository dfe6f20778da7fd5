use contracts::domain::internal_consumption::{
    InternalConsumptionPayload, InternalConsumptionSummary,
};

use crate::shared::api::{Api, ApiError};

pub async fn create(
    api: &Api,
    payload: &InternalConsumptionPayload,
) -> Result<InternalConsumptionSummary, ApiError> {
    api.post_json("/internal-consumptions", payload).await
}
