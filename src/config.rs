use std::time::Duration;

use clap::{Parser, Subcommand};

use replicate_models::ClientConfig;
use replicate_models::constants::{API_TOKEN_ENV, DEFAULT_BASE_URL};

#[derive(Parser, Debug, Clone)]
#[command(name = "replicate-models")]
#[command(about = "browse replicate models, collections and versions")]
pub struct Config {
    #[arg(long, default_value = DEFAULT_BASE_URL, help = "replicate API base url")]
    pub base_url: String,

    #[arg(long, env = API_TOKEN_ENV, hide_env_values = true, help = "replicate API token")]
    pub api_token: Option<String>,

    #[arg(
        long,
        default_value = "60s",
        value_parser = humantime::parse_duration,
        help = "request timeout (e.g. 30s, 2m)"
    )]
    pub timeout: Duration,

    #[arg(
        long,
        default_value = "warn",
        help = "log level (off, error, warn, info, debug, trace)"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Curated model collections
    #[command(subcommand)]
    Collections(CollectionsCommand),
    /// Models by owner/name or by collection
    #[command(subcommand)]
    Models(ModelsCommand),
    /// Versions of a model
    #[command(subcommand)]
    Versions(VersionsCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum CollectionsCommand {
    List {
        #[arg(long, help = "cursor url from a previous page")]
        cursor: Option<String>,
    },
    Get {
        slug: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ModelsCommand {
    Get {
        #[arg(help = "model identifier, owner/name")]
        identifier: String,
    },
    List {
        #[arg(long, help = "collection slug")]
        collection: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum VersionsCommand {
    List {
        #[arg(help = "model identifier, owner/name")]
        model: String,
    },
    Get {
        #[arg(help = "model identifier, owner/name")]
        model: String,
        id: String,
    },
}

impl Config {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            api_token: self.api_token.clone(),
            timeout: self.timeout,
        }
    }
}

pub fn validate_config(config: &Config) -> Result<(), String> {
    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(format!(
            "invalid base URL (must start with http:// or https://): {}",
            config.base_url
        ));
    }
    if let Err(e) = url::Url::parse(&config.base_url) {
        return Err(format!("invalid base URL format: {}", e));
    }
    if config.timeout.is_zero() {
        return Err("timeout must be greater than zero".to_string());
    }
    Ok(())
}
