use std::sync::Arc;

use crate::{
    routes::apply_routes,
    services::listings_service::listings_service::{ListingsService, ListingsServiceConfig},
    types::{app_config::AppConfig, app_state::AppState},
};
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn gen_app(config: &AppConfig) -> Router {
    let state = AppState {
        listings_source: Arc::new(ListingsService::new(ListingsServiceConfig {
            url: config.listings_api_url.clone(),
        })),
        search_scope: config.search_scope,
    };

    gen_app_with_state(state)
}

pub fn gen_app_with_state(state: AppState) -> Router {
    apply_routes(Router::new())
        .route("/", get(root))
        .layer(CorsLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// liveness sentinel
async fn root() -> &'static str {
    "¡Servidor funcionando!"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub listings_server: mockito::ServerGuard,
}

#[cfg(test)]
pub const MOCK_LISTINGS_PATH: &str = "/wp-json/wp/v2/job-listings";

/// App wired to a local mockito server standing in for the listings API.
#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let listings_server = mockito::Server::new_async().await;

    let config = AppConfig {
        listings_api_url: format!("{}{}", listings_server.url(), MOCK_LISTINGS_PATH),
        bind_addr: ([127, 0, 0, 1], 0).into(),
        search_scope: Default::default(),
    };

    MockApp {
        app: gen_app(&config),
        listings_server,
    }
}
