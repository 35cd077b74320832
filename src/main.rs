use anyhow::Result;
use clap::Parser;
use innkeep::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
