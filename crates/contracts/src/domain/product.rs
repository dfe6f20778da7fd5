use serde::{Deserialize, Serialize};

/// Product row as returned by `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub stock: f64,
}

/// Payload for `POST /products`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub stock: f64,
}
