mod config;
mod link;
mod logging;
mod report;
mod scan;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "orphan-docs",
    version,
    about = "Find markdown pages that no other page links to"
)]
struct Cli {
    /// Documentation root (defaults to `root` from orphan-docs.toml, then `docs`)
    root: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = config::load()?.resolve(cli.root.as_deref())?;
    tracing::debug!(?config, "resolved config");

    let report = scan::scan(&config)?;
    report::print(&report, cli.json)
}
