mod cli;
mod commands;

use clap::Parser;
use gather_agent::RestAgent;
use gather_core::dispatch::MemoryService;
use gather_core::store::ActivityStore;
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    cli::init_tracing(cli.verbose, cli.quiet)?;

    info!(api = %cli.api, memory = cli.memory, "starting gather CLI");

    if cli.memory {
        let store = ActivityStore::new(MemoryService::new());
        commands::execute(&store, cli.command).await?;
    } else {
        let store = ActivityStore::new(RestAgent::new(cli.api.clone()));
        commands::execute(&store, cli.command).await?;
    }

    info!("done");
    Ok(())
}
