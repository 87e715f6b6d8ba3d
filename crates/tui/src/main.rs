mod app;
mod client;
mod config;
mod error;
mod ui;

use std::{fs::OpenOptions, sync::Mutex, time::Duration};

use crate::{
    app::{App, route::Route},
    client::Client,
    config::AppConfig,
    error::{AppError, Result},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;

    let client = Client::new(
        &config.base_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    // Without an id the editor starts empty and saving creates a category.
    let route = Route::EditCategory {
        categoria_id: config.categoria_id.clone(),
    };

    let mut app = App::new(client, config.base_url.clone(), route);
    app.run().await?;
    Ok(())
}

/// Logs go to a file; stdout belongs to the terminal UI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "categorias_tui={level},api_types={level}",
            level = config.log_level
        ))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
