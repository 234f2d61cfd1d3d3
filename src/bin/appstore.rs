//! App-store catalog API binary.

use clap::Parser;

use dunes_backend::cli::{self, Cli};
use dunes_backend::server::{Server, ServiceKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli, ServiceKind::Store)?;
    cli::init_logger_from_settings(&settings)?;

    cli::execute_command(&cli, settings.clone(), ServiceKind::Store).await?;

    if cli.should_serve() {
        Server::new(settings, ServiceKind::Store).run().await?;
    }

    Ok(())
}
