mod config;
mod model;
mod prompt;
mod web;

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::sync::Arc;

use config::Config;
use model::{CompletionGateway, OpenAiClient};
use web::routes;

// App state structure
pub struct AppState {
    pub gateway: Arc<dyn CompletionGateway>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting survey chat backend");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let gateway = match OpenAiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize completion client: {:#}", e);
            std::process::exit(1);
        }
    };

    let app_state = Data::new(AppState {
        gateway: Arc::new(gateway),
    });

    info!("Listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(routes::cors())
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
