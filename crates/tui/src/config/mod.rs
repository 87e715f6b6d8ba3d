use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// Category to open in the editor; saving creates a new one when absent.
    pub categoria_id: Option<String>,
    pub request_timeout_secs: u64,
    pub log_file: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            categoria_id: None,
            request_timeout_secs: 10,
            log_file: "categorias_tui.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "categorias_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:8080).
    #[arg(long)]
    base_url: Option<String>,
    /// Category id to edit.
    #[arg(long)]
    categoria_id: Option<String>,
    /// Override log file path.
    #[arg(long)]
    log_file: Option<String>,
    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("CATEGORIAS_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(categoria_id) = args.categoria_id {
        settings.categoria_id = Some(categoria_id);
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}
