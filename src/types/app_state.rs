use std::sync::Arc;

use crate::{
    services::listings_service::listings_service::ListingsSource,
    utils::keyword_filter::SearchScope,
};

#[derive(Clone)]
pub struct AppState {
    pub listings_source: Arc<dyn ListingsSource>,
    pub search_scope: SearchScope,
}
