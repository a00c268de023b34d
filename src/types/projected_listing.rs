use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectedListing {
    #[serde(rename = "nombre")]
    pub name: Value,
    #[serde(rename = "ubicacion")]
    pub location: Value,
    #[serde(rename = "direccion")]
    pub address: Value,
    #[serde(rename = "categoria")]
    pub category: Value,
    #[serde(rename = "telefono")]
    pub phone: Value,
    #[serde(rename = "celular")]
    pub mobile: Value,
    pub website: Value,
    pub facebook: Value,
    pub instagram: Value,
    pub tiktok: Value,
    pub tripadvisor: Value,
    pub whatsapp: String,
    #[serde(rename = "link_perfil")]
    pub profile_link: Value,
    #[serde(rename = "latitud")]
    pub latitude: Option<Value>,
    #[serde(rename = "longitud")]
    pub longitude: Option<Value>,
    #[serde(rename = "mapa_google")]
    pub google_maps: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    #[serde(rename = "nombre")]
    pub name: Value,
    #[serde(rename = "ubicacion")]
    pub location: Value,
    #[serde(rename = "direccion")]
    pub address: Value,
    #[serde(rename = "telefono")]
    pub phone: Value,
    #[serde(rename = "distancia_km")]
    pub distance_km: f64,
    #[serde(rename = "mapa_google")]
    pub google_maps: String,
}
