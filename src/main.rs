use actix_web::{App, HttpServer};
use color_eyre::eyre::Report;
use debate_server::db::postgres::PgStore;
use debate_server::server::AppState;
use debate_server::{config::Config, db, log, server};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;

#[actix_rt::main]
async fn main() -> Result<(), Report> {
    dotenv().ok();
    color_eyre::install()?;
    log::init();

    let config = Config::from_env()?;
    let pool = db::new_pool(&config.database_url).await?;
    let store = Arc::new(PgStore::new(pool));

    info!("Starting debate server on {addr}", addr = config.bind_addr);
    HttpServer::new(move || {
        let state = AppState::shared(store.clone());
        App::new().configure(|cfg| server::configure(cfg, state))
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;

    Ok(())
}
