//! viewpane-dump: print the layout of a view pane configuration

mod cli;

use anyhow::{anyhow, Result};
use clap::Parser;

use cli::CliArgs;
use viewpane::config::PaneConfig;
use viewpane::debug_dump::dump_layout;

fn main() -> Result<()> {
    viewpane::tracing::init();

    let request = CliArgs::parse().into_request().map_err(|e| anyhow!(e))?;

    let mut config = match &request.config {
        Some(path) => PaneConfig::load_from(path)?,
        None => PaneConfig::load(),
    };
    config.layout.snap_to_pixel = request.snap_to_pixel;

    tracing::debug!(?request, "dumping layout");
    let dump = dump_layout(
        &config,
        request.viewport,
        &request.positions,
        &request.extents,
    );
    print!("{}", dump.to_yaml()?);
    Ok(())
}
