pub mod listings_service;
pub mod types;
