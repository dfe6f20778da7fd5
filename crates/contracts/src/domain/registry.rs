use serde::{Deserialize, Serialize};

/// Name-only registry entry: clients (cost centers), drivers, suppliers
/// and operators all share this shape on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub created_by: Option<i64>,
}

/// Payload for creating or renaming a registry entry.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryEntryPayload {
    pub name: String,
}
