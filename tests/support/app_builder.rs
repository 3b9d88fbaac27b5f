use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use backend::middleware::bearer_auth::BearerAuth;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::app_state::AppState;

/// Builds test service instances carrying the production middleware stack.
///
/// Requests pass through trace assignment, span creation, logging and the
/// bearer filter in the same order `main.rs` wires them; only CORS is left
/// out. Routes default to the production table, so most suites just call
/// `create_test_app(state).build()`.
pub struct TestAppBuilder {
    state: AppState,
    routes: Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            routes: Box::new(routes::configure),
        }
    }

    /// Swap the production route table for a probe table.
    ///
    /// Lets a suite mount a bespoke handler behind the real middleware
    /// stack, e.g. to inspect what the bearer filter attached.
    pub fn with_routes<F>(mut self, config: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.routes = Box::new(config);
        self
    }

    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let Self { state, routes } = self;

        test::init_service(
            App::new()
                .wrap(BearerAuth)
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(web::Data::new(state))
                .configure(|cfg| routes(cfg)),
        )
        .await
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
