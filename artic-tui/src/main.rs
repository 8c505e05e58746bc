mod app;
mod error;
mod input;
mod paths;
mod render;
mod settings;

use std::fs;
use std::fs::File;

use artic_lib::ArticClient;
use artic_lib::selector::CrossPageSelector;
use simplelog::{Config, WriteLogger};

use crate::app::App;
use crate::error::AppError;
use crate::settings::Settings;

fn init_logging(settings: &Settings) -> Result<(), AppError> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    paths::rotate_logs();

    let log_file = File::create(&path)?;
    WriteLogger::init(settings.log_level(), Config::default(), log_file)?;
    Ok(())
}

async fn run() -> Result<(), AppError> {
    let settings = match paths::settings_file() {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    init_logging(&settings)?;
    log::info!("Starting with {:?}", settings);

    let mut builder = ArticClient::builder()
        .base_url(settings.base_url.as_str())
        .user_agent(concat!("artic-tui/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = settings.timeout() {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    let selector = CrossPageSelector::new().with_concurrency(settings.select_concurrency);

    App::new(client, selector, settings.page_link_size).run().await
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
    }
}
