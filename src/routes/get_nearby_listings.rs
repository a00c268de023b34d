use crate::{
    services::listings_service::listings_service::describe_fetch_error,
    types::{api_reply::ApiReply, app_state::AppState, projected_listing::DistanceResult},
    utils::{
        app_error::AppError,
        proximity_ranker::{nearest, Coordinate},
        validated_query::{InvalidQueryMessage, ValidatedQuery},
    },
};
use axum::extract::State;
use serde::Deserialize;
use tracing::{error, info};
use validator::Validate;

pub const INVALID_COORDINATES: &str =
    "Proporcione latitud y longitud válidas como parámetros 'lat' y 'lon'.";
pub const NO_NEARBY_SITES: &str = "No se encontraron lugares cercanos.";

#[derive(Validate, Deserialize)]
pub struct GetNearbyListingsPayload {
    pub lat: f64,
    pub lon: f64,
}

impl InvalidQueryMessage for GetNearbyListingsPayload {
    const MESSAGE: &'static str = INVALID_COORDINATES;
}

pub async fn get_nearby_listings(
    State(state): State<AppState>,
    ValidatedQuery(GetNearbyListingsPayload { lat, lon }): ValidatedQuery<GetNearbyListingsPayload>,
) -> Result<ApiReply<DistanceResult>, AppError> {
    let listings = match state.listings_source.fetch_listings().await {
        Ok(listings) => listings,
        Err(e) => return Ok(ApiReply::error(describe_fetch_error(&e))),
    };

    let ranked = nearest(&listings, Coordinate { lat, lon }).map_err(|e| {
        error!("Failed to rank nearby listings: {}", e);
        AppError::internal()
    })?;

    info!("Ranked {} nearby listings around {},{}", ranked.len(), lat, lon);

    Ok(ApiReply::data_or_message(ranked, NO_NEARBY_SITES))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use super::*;
    use crate::{
        app::{gen_app_with_state, gen_mock_app, test_support::CountingSource, MOCK_LISTINGS_PATH},
        utils::{keyword_filter::SearchScope, proximity_ranker::NEAREST_LIMIT},
    };

    async fn body_json(response: Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn nearby_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn app_with(source: Arc<CountingSource>) -> axum::Router {
        gen_app_with_state(AppState {
            listings_source: source,
            search_scope: SearchScope::TopLevel,
        })
    }

    #[tokio::test]
    async fn test_end_to_end() {
        let mut mock_app = gen_mock_app().await;

        let mock_server = mock_app
            .listings_server
            .mock("GET", MOCK_LISTINGS_PATH)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"title":{"rendered":"Cascada X"},"meta":{"geolocation_lat":"14.1","geolocation_long":"-87.2","company_phone":"123"}}]"#,
            )
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(nearby_request("/cerca?lat=14.0&lon=-87.0"))
            .await
            .unwrap();

        mock_server.assert_async().await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: ApiReply<DistanceResult> =
            serde_json::from_value(body_json(response).await).unwrap();
        let ApiReply::Data(ranked) = body else {
            panic!("expected a list of nearby listings");
        };

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "Cascada X");
        assert_eq!(ranked[0].phone, "123");
        assert_eq!(ranked[0].location, "No especificada");
        assert!(ranked[0].distance_km > 0.0);
        assert!(ranked[0].google_maps.contains("14.1,-87.2"));
        assert!(ranked[0]
            .google_maps
            .starts_with("https://www.google.com/maps?q="));
    }

    #[tokio::test]
    async fn test_at_most_five_in_order() {
        let sites: Vec<Value> = (1..=9)
            .map(|i| {
                json!({
                    "title": { "rendered": format!("Sitio {i}") },
                    "meta": {
                        "geolocation_lat": format!("{}", 2.0 + f64::from(10 - i) * 0.05),
                        "geolocation_long": "-75.3",
                    },
                })
            })
            .collect();
        let source = Arc::new(CountingSource::new(Value::Array(sites)));

        let response = app_with(source.clone())
            .oneshot(nearby_request("/cerca?lat=2.0&lon=-75.3"))
            .await
            .unwrap();

        let body = body_json(response).await;
        let ranked = body.as_array().unwrap();

        assert_eq!(ranked.len(), NEAREST_LIMIT);
        assert_eq!(ranked[0]["nombre"], "Sitio 9");
        let distances: Vec<f64> = ranked
            .iter()
            .map(|r| r["distancia_km"].as_f64().unwrap())
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]), "{distances:?}");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_coordinates_skip_fetch() {
        for uri in [
            "/cerca?lat=abc&lon=-75.3",
            "/cerca?lat=2.0",
            "/cerca?lon=-75.3",
            "/cerca?lat=&lon=",
            "/cerca",
        ] {
            let source = Arc::new(CountingSource::new(json!([])));

            let response = app_with(source.clone())
                .oneshot(nearby_request(uri))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                body_json(response).await,
                json!({ "error": INVALID_COORDINATES }),
                "{uri}"
            );
            assert_eq!(source.calls(), 0, "{uri} must not fetch");
        }
    }

    #[tokio::test]
    async fn test_no_candidates_is_message() {
        let source = Arc::new(CountingSource::new(json!([
            { "title": { "rendered": "Sin coordenadas" }, "meta": { "ubicacion": "Neiva" } },
            { "title": { "rendered": "Sin longitud" }, "meta": { "geolocation_lat": "2.9" } },
        ])));

        let response = app_with(source)
            .oneshot(nearby_request("/cerca?lat=2.9&lon=-75.3"))
            .await
            .unwrap();

        assert_eq!(body_json(response).await, json!({ "mensaje": NO_NEARBY_SITES }));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_malformed_upstream_coordinate_fails_request() {
        let source = Arc::new(CountingSource::new(json!([
            { "title": { "rendered": "Bien" }, "meta": { "geolocation_lat": "2.9", "geolocation_long": "-75.3" } },
            { "title": { "rendered": "Mal" }, "meta": { "geolocation_lat": "dos", "geolocation_long": "-75.3" } },
        ])));

        let response = app_with(source)
            .oneshot(nearby_request("/cerca?lat=2.9&lon=-75.3"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Internal Server Error" })
        );
        assert!(logs_contain("Malformed upstream coordinate: dos"));
    }

    #[tokio::test]
    async fn test_upstream_unreachable_is_error_body() {
        let mut mock_app = gen_mock_app().await;

        mock_app
            .listings_server
            .mock("GET", MOCK_LISTINGS_PATH)
            .with_status(404)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(nearby_request("/cerca?lat=2.9&lon=-75.3"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["error"]
            .as_str()
            .is_some_and(|e| e.starts_with("Error al obtener datos: ")));
    }
}
