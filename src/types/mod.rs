pub mod api_reply;
pub mod app_config;
pub mod app_state;
pub mod projected_listing;
pub mod raw_listing;
