use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use backend::config::CardCorpus;
use backend::infra::rng::{FixedSeedSource, OsEntropySource, RngSource};
use backend::middleware::RequestTrace;
use backend::routes;
use backend::state::AppState;
use backend::store::{MemoryStore, SessionGateway};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🚀 Starting Blanks backend on http://{}:{}", host, port);

    let corpus = match CardCorpus::from_env() {
        Ok(corpus) => Arc::new(corpus),
        Err(e) => {
            eprintln!("❌ Failed to load card corpora: {e}");
            std::process::exit(1);
        }
    };

    // BACKEND_RNG_SEED pins every shuffle and id draw for reproducible runs.
    let rng_source: Arc<dyn RngSource> = match std::env::var("BACKEND_RNG_SEED") {
        Ok(seed) => match seed.parse::<u64>() {
            Ok(seed) => Arc::new(FixedSeedSource::new(seed)),
            Err(_) => {
                eprintln!("❌ BACKEND_RNG_SEED must be a u64");
                std::process::exit(1);
            }
        },
        Err(_) => Arc::new(OsEntropySource),
    };

    let gateway = SessionGateway::new(Arc::new(MemoryStore::new()), corpus, rng_source);
    let app_state = AppState::new(gateway);

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
