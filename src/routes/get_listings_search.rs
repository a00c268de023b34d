use crate::{
    services::listings_service::listings_service::describe_fetch_error,
    types::{api_reply::ApiReply, app_state::AppState, projected_listing::ProjectedListing},
    utils::{
        keyword_filter::search,
        validated_query::{InvalidQueryMessage, ValidatedQuery},
    },
};
use axum::extract::State;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

pub const MISSING_QUERY: &str = "Por favor proporciona un parámetro 'query'.";
pub const NO_SITES_FOUND: &str = "No se encontraron sitios turísticos.";

#[derive(Validate, Deserialize)]
pub struct GetListingsSearchPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub query: String,
}

impl InvalidQueryMessage for GetListingsSearchPayload {
    const MESSAGE: &'static str = MISSING_QUERY;
}

pub async fn get_listings_search(
    State(state): State<AppState>,
    ValidatedQuery(GetListingsSearchPayload { query }): ValidatedQuery<GetListingsSearchPayload>,
) -> ApiReply<ProjectedListing> {
    let listings = match state.listings_source.fetch_listings().await {
        Ok(listings) => listings,
        Err(e) => return ApiReply::error(describe_fetch_error(&e)),
    };

    let found = search(&listings, &query, state.search_scope);
    info!(
        "Search {:?} matched {} of {} listings",
        query,
        found.len(),
        listings.len()
    );

    ApiReply::data_or_message(found, NO_SITES_FOUND)
}
