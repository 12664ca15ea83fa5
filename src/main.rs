use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{debug, info, warn};

mod api;
mod apierror;
mod config;
mod notion;
mod renderer;

use api::{api_routes, notion_routes};
use config::Config;
use notion::{BlockFetcher, HttpNotionClient};
use renderer::{RenderOptions, Renderer};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Before the logger so RUST_LOG may come from `.env` too.
    let dotenv = config::load_dotenv(None);

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    match dotenv {
        Ok(Some(path)) => info!("Loaded environment from {}", path.display()),
        Ok(None) => debug!("No .env file found, using the process environment"),
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }

    let config =
        Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    if config.notion_token.is_none() {
        warn!("NOTION_TOKEN is not set; upstream calls will be rejected");
    }

    let client = HttpNotionClient::new(&config).map_err(io::Error::other)?;

    let fetcher =
        web::Data::new(BlockFetcher::new(Arc::new(client)).with_page_size(config.page_size));
    let renderer = web::Data::new(Renderer::new(RenderOptions {
        skip_empty_paragraphs: config.skip_empty_paragraphs,
    }));

    info!(
        "Notion proxy listening on {}:{}",
        config.host, config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(fetcher.clone())
            .app_data(renderer.clone())
            .service(notion_routes())
            .service(api_routes())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
