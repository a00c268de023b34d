use serde_json::Value;

use crate::{
    types::{projected_listing::DistanceResult, raw_listing::RawListing},
    utils::{
        json_value::as_text,
        listing_projector::{coordinates, google_maps_link, meta_or, name, UNSPECIFIED_F, UNSPECIFIED_M},
    },
};

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const NEAREST_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, PartialEq)]
pub enum RankerError {
    MalformedCoordinate(String),
}

impl std::fmt::Display for RankerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RankerError::MalformedCoordinate(value) => {
                write!(f, "Malformed upstream coordinate: {}", value)
            }
        }
    }
}

impl std::error::Error for RankerError {}

/// Great-circle distance in kilometres between two points given in degrees.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (to.lon - from.lon).to_radians();

    // rounding can push `a` past 1 for near-antipodal points
    let a = ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn coordinate_value(value: &Value) -> Result<f64, RankerError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        // only `true` gets here, falsy coordinates are filtered out earlier
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    parsed.ok_or_else(|| RankerError::MalformedCoordinate(as_text(value).into_owned()))
}

/// Listings without both coordinates are skipped. A coordinate that is present
/// but not numeric fails the whole ranking.
pub fn nearest(listings: &[RawListing], origin: Coordinate) -> Result<Vec<DistanceResult>, RankerError> {
    let mut ranked = Vec::new();

    for raw in listings {
        let Some((lat, long)) = coordinates(raw) else {
            continue;
        };

        let target = Coordinate {
            lat: coordinate_value(lat)?,
            lon: coordinate_value(long)?,
        };

        ranked.push(DistanceResult {
            name: name(raw),
            location: meta_or(raw, "ubicacion", UNSPECIFIED_F),
            address: meta_or(raw, "geolocation_formatted_address", UNSPECIFIED_F),
            phone: meta_or(raw, "company_phone", UNSPECIFIED_M),
            distance_km: round_2(haversine_km(origin, target)),
            google_maps: google_maps_link(lat, long),
        });
    }

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(NEAREST_LIMIT);

    Ok(ranked)
}
