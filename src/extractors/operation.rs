//! Extract a typed operation from a `{ "type": ..., "args": ... }` JSON body.

use crate::error::AppError;
use crate::requests::Operation;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde_json::{Map, Value};

/// Extractor for one operation of a route's dispatch table.
///
/// The body is parsed as JSON whatever the content type. An empty body, or a non-JSON body sent
/// without a JSON content type, counts as `{}` and so ends up as an unknown operation. Invalid JSON
/// declared as JSON is a 400. Discriminator and args are checked by [`Operation::from_body`].
#[derive(Clone, Debug)]
pub struct Dispatch<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Dispatch<T>
where
    S: Send + Sync,
    T: Operation + Send + 'static,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        T::from_body(parse_body(&bytes, declared_json)?).map(Dispatch)
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn parse_body(bytes: &[u8], declared_json: bool) -> Result<Value, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => Ok(value),
        Err(e) if declared_json => Err(AppError::BadRequest(format!("invalid JSON body: {e}"))),
        Err(_) => Ok(Value::Object(Map::new())),
    }
}
