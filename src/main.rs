mod cache;
mod config;
mod fetching;
mod handlers;
mod models;
mod routes;
mod schedule;
mod state;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::fetching::supabase::SupabaseSource;
use crate::handlers::clock::spawn_clock;
use crate::handlers::refresh::spawn_refresher;
use crate::state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let source = SupabaseSource::new(&config.store)?;
    let clock = spawn_clock(config.clock_tick);
    let bind_addr = config.bind_addr.clone();

    info!(
        location = %config.location.code,
        name = %config.location.name,
        "Starting appointment board"
    );

    let state = web::Data::new(AppState::new(config, Arc::new(source), clock));
    spawn_refresher(state.clone().into_inner());

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes::init))
        .bind(&bind_addr)
        .with_context(|| format!("failed to bind {bind_addr}"))?
        .run()
        .await?;

    Ok(())
}
