pub mod listings_service;
