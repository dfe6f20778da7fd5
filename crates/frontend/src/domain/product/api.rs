use contracts::domain::product::{Product, ProductCreate};

use crate::shared::api::{Api, ApiError};

pub async fn list(api: &Api) -> Result<Vec<Product>, ApiError> {
    api.get_json("/products").await
}

pub async fn create(api: &Api, payload: &ProductCreate) -> Result<Product, ApiError> {
    api.post_json("/products", payload).await
}

pub async fn delete(api: &Api, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/products/{}", id)).await
}
