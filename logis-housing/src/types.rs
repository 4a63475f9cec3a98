use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Response envelope shared by every housing API endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: Option<Value>,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_ok(&self) -> bool {
        self.status.as_ref().and_then(Value::as_i64) == Some(200)
    }
}

/// Occupancy counts keyed by room state (`"Occupée"`, `"Disponible"`, ...).
pub type OccupancyCounts = HashMap<String, Value>;

/// One entry of the detailed room listing. Every field is optional upstream.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RoomRecord {
    #[serde(default)]
    pub numero_chambre: Option<Value>,
    #[serde(default)]
    pub etat: Option<Value>,
    #[serde(default)]
    pub surface: Option<Value>,
    #[serde(default)]
    pub etudiant_nom: Option<Value>,
    #[serde(default)]
    pub type_chambre: Option<Value>,
    #[serde(default)]
    pub etage: Option<Value>,
    #[serde(default)]
    pub batiment: Option<Value>,
}
