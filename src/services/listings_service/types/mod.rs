pub mod listings_service_error;
