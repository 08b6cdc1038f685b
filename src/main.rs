//! Name Forge server
//!
//! Serves `POST /generate-names` and `GET /health` over HTTP.

use std::env;
use std::sync::Arc;

use anyhow::Context;
use name_forge::{
    api,
    config::{self, AppConfig},
    llm::{self, RemoteGenerator},
    GenerationService,
};
use poem::{listener::TcpListener, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    name_forge::init().context("Failed to initialize")?;
    let config = AppConfig::from_env().context("Invalid configuration")?;
    config::init_logging(&config.log_level).context("Failed to set up logging")?;

    let service = build_service(&config)?;
    let address = config.bind_address();

    tracing::info!(
        address = %address,
        version = name_forge::VERSION,
        remote_configured = service.has_remote(),
        "Starting name-forge server"
    );

    Server::new(TcpListener::bind(address.as_str()))
        .run(api::routes(Arc::new(service)))
        .await
        .with_context(|| format!("Server on {} stopped", address))
}

/// Wire the completion provider, if any, into the generation service
fn build_service(config: &AppConfig) -> anyhow::Result<GenerationService> {
    let Some(llm_config) = &config.llm else {
        tracing::warn!("No API key configured, serving template names only");
        return Ok(GenerationService::fallback_only());
    };

    let provider = llm::create_provider(llm_config)
        .with_context(|| format!("Failed to create {} provider", llm_config.provider))?;
    if !provider.is_ready() {
        tracing::warn!(
            provider = %provider.name(),
            "Provider is not ready, serving template names only"
        );
        return Ok(GenerationService::fallback_only());
    }
    tracing::info!(
        provider = %provider.name(),
        model = %provider.model(),
        "Remote generation enabled"
    );

    Ok(GenerationService::new(Some(RemoteGenerator::new(Arc::from(provider)))))
}

fn print_help() {
    println!("Name Forge - business, baby, pet and hashtag name generation");
    println!();
    println!("USAGE:");
    println!("    name-forge");
    println!();
    println!("ENDPOINTS:");
    println!("    POST /generate-names   Generate a batch of names");
    println!("    GET  /health           Service status");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    HOST                 Bind host (default: 0.0.0.0)");
    println!("    PORT                 Bind port (default: 3000)");
    println!("    LOG_LEVEL            Log filter (default: info)");
    println!("    LLM_PROVIDER         openai | anthropic | none");
    println!("    OPENAI_API_KEY       OpenAI API key");
    println!("    OPENAI_MODEL         OpenAI model (default: gpt-3.5-turbo)");
    println!("    OPENAI_BASE_URL      OpenAI-compatible endpoint");
    println!("    ANTHROPIC_API_KEY    Anthropic API key");
    println!("    ANTHROPIC_MODEL      Anthropic model");
    println!("    REMOTE_TIMEOUT_SECS  Completion timeout (default: 30)");
    println!("    MAX_TOKENS           Completion token limit (default: 1000)");
    println!();
    println!("Without an API key every response is built from the template generator.");
}
