use clap::Parser;
use serde::Serialize;

use replicate_models::logging::setup_logging;
use replicate_models::{Client, ClientError};

mod config;

use config::{CollectionsCommand, Command, Config, ModelsCommand, VersionsCommand};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::parse();

    config::validate_config(&cfg)?;

    setup_logging(&cfg.log_level)?;

    let client = Client::new(cfg.client_config())?;
    run(&client, cfg.command).await?;
    Ok(())
}

async fn run(client: &Client, command: Command) -> Result<(), ClientError> {
    match command {
        Command::Collections(CollectionsCommand::List { cursor }) => {
            let page = client.collections().list_page(cursor.as_deref()).await?;
            if let Some(next) = &page.next {
                log::info!("more collections available: --cursor {}", next);
            }
            print_json(&page.results)
        }
        Command::Collections(CollectionsCommand::Get { slug }) => {
            print_json(&client.collections().get(&slug).await?)
        }
        Command::Models(ModelsCommand::Get { identifier }) => {
            print_json(&client.models().get(&identifier).await?)
        }
        Command::Models(ModelsCommand::List { collection }) => {
            let collection = client.collections().get(&collection).await?;
            print_json(&collection.models(client).list().await?)
        }
        Command::Versions(VersionsCommand::List { model }) => {
            let model = client.models().get(&model).await?;
            print_json(&model.versions(client).list().await?)
        }
        Command::Versions(VersionsCommand::Get { model, id }) => {
            let model = client.models().get(&model).await?;
            print_json(&model.versions(client).get(&id).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ClientError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| ClientError::invalid_response(&format!("failed to render output: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
