//! Dispatch CLI
//!
//! Runs the HTTP server by default; `run` and `capabilities` work directly
//! against the configuration without starting a server.

use anyhow::Context;
use clap::{Parser, Subcommand};
use dispatch::{Params, ServerSettings, TaskExecutor};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "dispatch")]
#[command(about = "Dispatch named tasks to AI text-generation providers", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Directory containing agents.yaml and tasks.yaml [env: DISPATCH_CONFIG_DIR]
    #[arg(short, long, global = true)]
    config_dir: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Bind address [env: HOST]
        #[arg(long)]
        host: Option<String>,
        /// Listen port [env: PORT]
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Execute one task and print the result as JSON
    Run {
        /// Task name from tasks.yaml
        task: String,
        /// Task params as a JSON object
        #[arg(short, long, default_value = "{}")]
        params: String,
    },

    /// Print an agent's capabilities
    Capabilities {
        /// Agent name from agents.yaml
        agent: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    tooling::logging::init_tracing(&cli.log_level)?;

    let mut settings = ServerSettings::from_env()?;
    if let Some(dir) = cli.config_dir {
        settings.config_dir = dir;
    }

    let executor = TaskExecutor::from_env(&settings.config_dir).with_context(|| {
        format!(
            "failed to initialize from {}",
            settings.config_dir.display()
        )
    })?;

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                settings.host = host;
            }
            if let Some(port) = port {
                settings.port = port;
            }
            let addr = settings.socket_addr()?;
            dispatch::server::serve(addr, Arc::new(executor)).await?;
        }
        Commands::Run { task, params } => {
            let params: Params = serde_json::from_str(&params)
                .context("--params must be a JSON object")?;
            let result = executor.execute_task(&task, &params).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.is_success() {
                std::process::exit(1);
            }
        }
        Commands::Capabilities { agent } => {
            let capabilities = executor.get_agent_capabilities(&agent);
            println!("{}", serde_json::to_string_pretty(&capabilities)?);
        }
    }

    Ok(())
}
