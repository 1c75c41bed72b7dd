// src/main.rs
mod config;
mod dtos;
mod errors;
mod handlers;
mod models;
mod repositories;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use crate::config::AppConfig;
use crate::repositories::post_repository::{PgPostRepository, PostRepository};

#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

/// Any origin may call the API; the companion front-end is served elsewhere.
fn build_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("Database: {}", app_config.database.masked());

    // One pool for the whole process; closed after the server stops.
    let pg_pool = match config::get_pg_pool(&app_config) {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to create PG pool: {:#}", e);
            std::process::exit(1);
        }
    };

    let state = web::Data::new(AppState {
        posts: Arc::new(PgPostRepository::new(pg_pool.clone())),
    });

    let bind_address = app_config.bind_address();
    info!("Starting server on {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
    });
    if let Some(workers) = app_config.workers {
        server = server.workers(workers);
    }

    let result = server.bind(&bind_address)?.run().await;

    pg_pool.close();
    info!("Server stopped, database pool closed");

    result
}
