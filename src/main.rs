use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;
use meteo_toolbox::config::LoggingConfig;
use meteo_toolbox::{ToolboxActionService, ToolboxConfig, ToolboxError, Value, logging};
use tracing::warn;

/// Evaluate geographic and meteorological toolbox functions
#[derive(Debug, Parser)]
#[command(name = "toolbox", version, about)]
struct Cli {
    /// Configuration file (defaults to <config dir>/toolbox/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List the available functions
    #[arg(short, long)]
    list: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Function to call, e.g. humidex
    function: Option<String>,

    /// Positional arguments: numbers, integers, true/false
    #[arg(allow_negative_numbers = true)]
    args: Vec<String>,
}

fn run(cli: Cli) -> Result<()> {
    let config = ToolboxConfig::load_from_path(cli.config.clone())?;
    if config.is_none() {
        if let Some(path) = &cli.config {
            eprintln!("No configuration found at {}", path.display());
        }
    }

    let logging_config = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_else(LoggingConfig::default);
    logging::init(&logging_config)?;

    let mut service = ToolboxActionService::new();
    service.updated(config.as_ref());
    service.activate();

    if !service.is_properly_configured() {
        warn!("Running without configuration, using the standard formula set");
    }

    if cli.list {
        let docs: Vec<_> = service.registry().docs().collect();
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&docs)?);
        } else {
            for doc in docs {
                println!("{} -> {}", doc.signature(), doc.returns);
                println!("    {}", doc.text);
            }
        }
        service.deactivate();
        return Ok(());
    }

    let Some(function) = cli.function else {
        bail!("No function given. Use --list to see the available functions.");
    };

    let args: Vec<Value> = cli.args.iter().map(|raw| Value::parse_arg(raw)).collect();
    let result = service.invoke(&function, &args)?;

    if cli.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{result}");
    }

    service.deactivate();
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = match err.downcast_ref::<ToolboxError>() {
                Some(toolbox_err) => toolbox_err.user_message(),
                None => format!("{err:#}"),
            };
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}
