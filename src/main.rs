mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    mctest::logger::init_logger();

    let cli = Cli::parse();
    let tally = cli::run(cli).await?;
    if tally.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
