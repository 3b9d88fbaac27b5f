use actix_web::{web, App, HttpServer};
use backend::middleware::bearer_auth::BearerAuth;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // No dotenv loading here: the runtime (compose env_file, CI, or a
    // manually sourced .env) is expected to provide the variables.
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = match std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
    {
        Ok(port) => port,
        Err(_) => {
            eprintln!("❌ BACKEND_PORT is not a valid port number");
            std::process::exit(1);
        }
    };

    // JWT_SECRET and JWT_EXPIRATION have no defaults; refusing to start
    // beats silently signing tokens with a made-up key.
    let security = match SecurityConfig::from_env() {
        Ok(security) => security,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting Property Pulse backend on http://{}:{}",
        host, port
    );

    let app_state = AppState::in_memory(security);
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(BearerAuth)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
