use clap::Parser;
use pixeldojo_mcp::{
    cli::Cli, logger, DojoError, PixelDojoClient, PixelDojoConfig, PixelDojoServer, ToolDispatcher,
};
use rmcp::{transport::stdio, ServiceExt};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(cli.logger_config())?;
    if cli.verbose {
        log::debug!("Verbose logging enabled");
    }

    if dotenv_loaded {
        log::info!(".env file loaded");
    } else {
        log::debug!("No .env file found, using process environment");
    }

    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = PixelDojoConfig::from_env();
    if config.api_key.is_none() {
        log::error!("PIXELDOJO_API_KEY environment variable not set.");
        log::error!("Please set your API key with: export PIXELDOJO_API_KEY=your_api_key_here");
        return Err(DojoError::MissingApiKey.into());
    }
    if let Some(warning) = config.key_format_warning() {
        log::warn!("{}", warning);
    }
    logger::log_config_info(&config);

    let client = PixelDojoClient::new(config)?;
    let server = PixelDojoServer::new(ToolDispatcher::new(Arc::new(client)));

    let service = server.serve(stdio()).await.inspect_err(|e| {
        log::error!("MCP serve error: {:?}", e);
    })?;

    tokio::select! {
        quit = service.waiting() => {
            quit?;
            log::info!("MCP session closed");
        }
        _ = tokio::signal::ctrl_c() => {
            log::info!("Server stopped by user");
        }
    }
    Ok(())
}
