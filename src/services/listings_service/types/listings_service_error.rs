#[derive(Debug)]
pub enum ListingsServiceError {
    Request(String),
    Status(String),
    Decode(String),
}

impl std::fmt::Display for ListingsServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ListingsServiceError::Request(e)
            | ListingsServiceError::Status(e)
            | ListingsServiceError::Decode(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ListingsServiceError {}
