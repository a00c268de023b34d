use std::collections::HashSet;

use axum::{
    async_trait,
    extract::{FromRequest, Query, Request},
    http::Uri,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::types::api_reply::ApiReply;

/// Fixed message returned to the client when a query payload is missing,
/// unparsable or fails validation.
pub trait InvalidQueryMessage {
    const MESSAGE: &'static str;
}

pub struct ValidatedQuery<T>(pub T);

/// Drops repeated keys so `?query=a&query=b` reads as `query=a`.
fn first_values(uri: &Uri) -> Option<Uri> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;

    let mut seen = HashSet::new();
    let query = pairs
        .into_iter()
        .filter(|(key, _)| seen.insert(key.clone()))
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(&key),
                urlencoding::encode(&value)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("/?{}", query).parse().ok()
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + InvalidQueryMessage,
    S: Send + Sync,
{
    type Rejection = ApiReply<()>;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let uri = first_values(req.uri()).ok_or_else(|| {
            debug!("Unreadable query string: {:?}", req.uri().query());
            ApiReply::error(T::MESSAGE)
        })?;

        let Query(data) = Query::<T>::try_from_uri(&uri).map_err(|e| {
            debug!("Rejected query: {}", e.body_text());
            ApiReply::error(T::MESSAGE)
        })?;

        data.validate().map_err(|e| {
            debug!("Invalid query: {}", e);
            ApiReply::error(T::MESSAGE)
        })?;

        Ok(ValidatedQuery(data))
    }
}
