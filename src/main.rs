mod error;
mod handlers;
mod models;
mod routes;
mod store;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use tracing::info;

use crate::store::ClinicStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .context("PORT must be a valid port number")?;

    let store = web::Data::new(ClinicStore::with_seed_doctors());

    info!("Serving clinic API on port {}", port);

    HttpServer::new(move || App::new().app_data(store.clone()).configure(routes::init))
        .bind(("0.0.0.0", port))?
        .run()
        .await?;

    Ok(())
}
