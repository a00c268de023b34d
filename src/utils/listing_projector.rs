use serde_json::Value;

use crate::{
    types::{projected_listing::ProjectedListing, raw_listing::RawListing},
    utils::json_value::as_text,
};

pub const NAME_UNAVAILABLE: &str = "Nombre no disponible";
pub const UNSPECIFIED_F: &str = "No especificada";
pub const UNSPECIFIED_M: &str = "No especificado";
pub const UNAVAILABLE: &str = "No disponible";

pub fn project(raw: &RawListing) -> ProjectedListing {
    ProjectedListing {
        name: name(raw),
        location: meta_or(raw, "ubicacion", UNSPECIFIED_F),
        address: meta_or(raw, "geolocation_formatted_address", UNSPECIFIED_F),
        category: meta_or(raw, "categoria", UNSPECIFIED_F),
        phone: meta_or(raw, "company_phone", UNSPECIFIED_M),
        mobile: meta_or(raw, "company_mobile", UNSPECIFIED_M),
        website: meta_or(raw, "company_website", UNSPECIFIED_M),
        facebook: meta_or(raw, "company_facebook", UNSPECIFIED_M),
        instagram: meta_or(raw, "company_instagram", UNSPECIFIED_M),
        tiktok: meta_or(raw, "company_tiktok", UNSPECIFIED_M),
        tripadvisor: meta_or(raw, "company_tripadvisor", UNSPECIFIED_M),
        whatsapp: raw
            .truthy_meta("company_whatsapp")
            .map(|number| format!("https://wa.me/{}", as_text(number)))
            .unwrap_or_else(|| UNAVAILABLE.to_string()),
        profile_link: meta_or(raw, "link", UNAVAILABLE),
        latitude: raw.meta("geolocation_lat").cloned(),
        longitude: raw.meta("geolocation_long").cloned(),
        google_maps: coordinates(raw)
            .map(|(lat, long)| google_maps_link(lat, long))
            .unwrap_or_else(|| UNAVAILABLE.to_string()),
    }
}

pub fn name(raw: &RawListing) -> Value {
    raw.title_rendered()
        .cloned()
        .unwrap_or_else(|| Value::from(NAME_UNAVAILABLE))
}

pub fn meta_or(raw: &RawListing, key: &str, fallback: &str) -> Value {
    raw.truthy_meta(key)
        .cloned()
        .unwrap_or_else(|| Value::from(fallback))
}

/// Both coordinates, only when each one is present and truthy.
pub fn coordinates(raw: &RawListing) -> Option<(&Value, &Value)> {
    Some((
        raw.truthy_meta("geolocation_lat")?,
        raw.truthy_meta("geolocation_long")?,
    ))
}

pub fn google_maps_link(lat: &Value, long: &Value) -> String {
    format!(
        "https://www.google.com/maps?q={},{}",
        as_text(lat),
        as_text(long)
    )
}
