use actix_web::{HttpServer, web};
use std::io;

use veggie_forecast::api;
use veggie_forecast::config::Config;
use veggie_forecast::services::vegetable_data;
use veggie_forecast::state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let filter = config.as_ref().map(Config::log_filter).unwrap_or("info");
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(filter));

    let config = config.map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    // Loaded for the health check only; forecasts never read it.
    let state = web::Data::new(AppState::new(vegetable_data::try_load_data(
        &config.data_path,
    )));

    log::info!(
        "Starting Vegetable Price Forecast Backend at http://{}:{}",
        config.host,
        config.port
    );
    if config.debug {
        log::debug!("Debug logging enabled");
    }

    HttpServer::new(move || api::app(state.clone()))
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
