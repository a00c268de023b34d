use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_listings_search;
mod get_nearby_listings;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/buscar",
        get(get_listings_search::get_listings_search),
    )
    .route(
        "/cerca",
        get(get_nearby_listings::get_nearby_listings),
    )
}
