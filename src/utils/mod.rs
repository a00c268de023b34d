pub mod app_error;
pub mod json_value;
pub mod keyword_filter;
pub mod listing_projector;
pub mod proximity_ranker;
pub mod validated_query;
