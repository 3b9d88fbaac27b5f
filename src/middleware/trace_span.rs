//! Tracing span wrapped around each request.
//!
//! Opens a span named "request" carrying `trace_id`, `method`, and `path`
//! and instruments the downstream future, so logs emitted inside handlers
//! and services inherit these fields without threading them by hand.
//!
//! Runs after `RequestTrace`, which is what puts the [`TraceId`] into the
//! request extensions.

use std::future::{ready, Ready};
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{info_span, Instrument, Span};

use crate::middleware::request_trace::TraceId;

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let span = request_span(&req);
        Box::pin(self.service.call(req).instrument(span))
    }
}

fn request_span(req: &ServiceRequest) -> Span {
    let trace_id = req
        .extensions()
        .get::<TraceId>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "missing-trace-id".to_string());

    info_span!("request", trace_id = %trace_id, method = %req.method(), path = %req.path())
}
