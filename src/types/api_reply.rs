use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Body of every `/buscar` and `/cerca` answer. All three variants go out with
/// `200 OK`; clients tell them apart by shape.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiReply<T> {
    Data(Vec<T>),
    Message { mensaje: String },
    Error { error: String },
}

impl<T> ApiReply<T> {
    pub fn message(mensaje: &str) -> Self {
        ApiReply::Message {
            mensaje: mensaje.to_string(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        ApiReply::Error {
            error: error.into(),
        }
    }

    /// Non-empty results become `Data`, an empty list becomes the given message.
    pub fn data_or_message(data: Vec<T>, mensaje: &str) -> Self {
        if data.is_empty() {
            Self::message(mensaje)
        } else {
            ApiReply::Data(data)
        }
    }
}

impl<T: Serialize> IntoResponse for ApiReply<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
