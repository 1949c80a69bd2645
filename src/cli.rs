use crate::logger::LoggerConfig;
use clap::Parser;

/// Command line of the `pixeldojo-mcp` binary. Everything else comes from the
/// environment.
#[derive(Debug, Parser)]
#[command(name = "pixeldojo-mcp", version, about = "PixelDojo image generation MCP server")]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Environment logging settings with `--verbose` applied on top.
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig::from_env().with_verbose(self.verbose)
    }
}
