use anyhow::Context;
use tokio::net::TcpListener;

mod config;
mod data;
mod features;
mod handlers;
mod utils;

use config::{Cli, Command, Settings};
use features::{
    dictionary::{clean_word, root_word, word_stats, DictionaryApi},
    suggestions::SuggestionProvider,
};
use handlers::{AppState, ROUTES};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::load();
    let settings = cli.settings;
    utils::logging::configure_logging(settings.log_level, settings.log_config.as_deref())?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&settings).await,
        Command::Define { word } => define(&settings, &word).await,
        Command::Suggest { partial } => {
            for suggestion in load_suggestions(&settings)?.suggest(&partial) {
                println!("{}", suggestion);
            }
            Ok(())
        }
        Command::Root { word } => {
            println!("cleaned: {}", clean_word(&word));
            println!("root: {}", root_word(&word));
            Ok(())
        }
        Command::Stats { text } => {
            println!("{}", serde_json::to_string_pretty(&word_stats(&text))?);
            Ok(())
        }
    }
}

fn load_suggestions(settings: &Settings) -> anyhow::Result<SuggestionProvider> {
    let provider = match &settings.words_file {
        Some(path) => SuggestionProvider::from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => SuggestionProvider::default(),
    };
    log::debug!("suggestion vocabulary holds {} words", provider.len());
    Ok(provider)
}

async fn define(settings: &Settings, word: &str) -> anyhow::Result<()> {
    let api = DictionaryApi::new(&settings.dictionary_api_url)?;
    let result = api.lookup(word).await;

    for entry in result.data.iter().flatten() {
        log::info!(
            "{}: phonetic {}, audio {}",
            entry.word,
            entry.primary_phonetic().unwrap_or("-"),
            entry.audio_url().unwrap_or("-")
        );
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let dictionary = DictionaryApi::new(&settings.dictionary_api_url)?;
    log::info!("relaying lookups to {}", dictionary.base_url());
    let state = AppState::new(dictionary, load_suggestions(settings)?);
    let app = handlers::router(state);

    let address = settings.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind to {}", address))?;

    println!("Dictionary API server running on http://localhost:{}", settings.port);
    println!("Available endpoints:");
    for route in ROUTES {
        println!("  - {}", route);
    }
    println!("Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    println!("\nShutting down server...");
}
