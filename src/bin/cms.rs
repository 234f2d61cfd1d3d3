//! Basketball CMS API binary.

use clap::Parser;

use dunes_backend::cli::{self, Cli};
use dunes_backend::server::{Server, ServiceKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli, ServiceKind::Cms)?;
    cli::init_logger_from_settings(&settings)?;

    cli::execute_command(&cli, settings.clone(), ServiceKind::Cms).await?;

    if cli.should_serve() {
        Server::new(settings, ServiceKind::Cms).run().await?;
    }

    Ok(())
}
