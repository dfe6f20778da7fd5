//! Uniform `{id, name}` CRUD shared by the four reference registries
//! (clients, drivers, suppliers, operators).

use contracts::domain::registry::{RegistryEntry, RegistryEntryPayload};

use crate::shared::api::{Api, ApiError};

pub async fn list(api: &Api, path: &str) -> Result<Vec<RegistryEntry>, ApiError> {
    api.get_json(path).await
}

pub async fn create(api: &Api, path: &str, name: String) -> Result<RegistryEntry, ApiError> {
    api.post_json(path, &RegistryEntryPayload { name }).await
}

pub async fn rename(
    api: &Api,
    path: &str,
    id: i64,
    name: String,
) -> Result<RegistryEntry, ApiError> {
    api.put_json(&format!("{}/{}", path, id), &RegistryEntryPayload { name })
        .await
}

pub async fn delete(api: &Api, path: &str, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("{}/{}", path, id)).await
}

/// Names only, for the autocomplete selectors on the create pages.
pub async fn names(api: &Api, path: &str) -> Result<Vec<String>, ApiError> {
    let entries = list(api, path).await?;
    Ok(entries.into_iter().map(|entry| entry.name).collect())
}
