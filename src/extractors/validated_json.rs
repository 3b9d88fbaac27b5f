use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use bytes::BytesMut;
use futures_util::future::LocalBoxFuture;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::logging::pii::Redacted;

/// JSON body extractor with standardized error handling.
///
/// Deserializes request bodies and converts parse failures into the crate's
/// problem-details response (HTTP 400, code VALIDATION) with a sanitized
/// message, instead of actix's default JSON error payload. Log events here
/// inherit the request span, so they carry the trace id without threading
/// it explicitly.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let payload = payload.take();
        // Owned copy so the async block does not borrow the request
        let content_type = req.content_type().to_string();

        Box::pin(async move {
            let body = collect_body(payload).await?;

            match serde_json::from_slice::<T>(&body) {
                Ok(value) => Ok(ValidatedJson(value)),
                Err(e) => {
                    debug!(
                        error = %Redacted(&e.to_string()),
                        content_type = %content_type,
                        body_size = body.len(),
                        "JSON parsing failed"
                    );
                    Err(AppError::invalid(describe_parse_error(&e)))
                }
            }
        })
    }
}

async fn collect_body(mut payload: Payload) -> Result<BytesMut, AppError> {
    let mut buf = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            warn!(error = %e, "failed to read request body chunk");
            AppError::invalid("Failed to read request body".to_string())
        })?;
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

/// Map a parse failure to a client-safe message; raw serde errors can echo
/// body fragments back, so they only go to the debug log.
fn describe_parse_error(error: &JsonError) -> String {
    match error.classify() {
        Category::Syntax => format!("Invalid JSON at line {}", error.line()),
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Data => "Invalid JSON: wrong types for one or more fields".to_string(),
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
