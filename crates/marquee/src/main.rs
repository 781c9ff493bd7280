use std::net::Ipv4Addr;

use anyhow::Context;
use clap::Parser;
use marquee_lib::config::Config;
use marquee_lib::graphql_api::{self, ApiSchemaContext};
use marquee_lib::{CliOptions, MARQUEE_VERSION};
use marquee_store::Store;
use tokio::net::TcpListener;
use tracing::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!(version = MARQUEE_VERSION, "Parse options");
    let cli_options = CliOptions::parse();

    let config = match &cli_options.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration file");
            Config::read(path)?
        }
        None => {
            info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    info!("Initialize store");
    let store = Store::new(config.seed).context("invalid seed data")?;
    info!("Store initialization successful");

    let api_schema = graphql_api::api_schema(ApiSchemaContext { store });
    let router = graphql_api::axum_router(api_schema, config.graphql.playground);

    let port = config.graphql.port;
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
        .await
        .with_context(|| format!("failed to bind to port {port}"))?;

    info!(port, playground = config.graphql.playground, "Server is running");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}
