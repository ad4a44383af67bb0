mod args;
mod debugger;
mod error;
mod extractor;

use anyhow::Result;
use args::Args;
use clap::Parser;
use debugger::{Gdb, GDB_PROGRAM};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("addrlist=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let offsets = extractor::extract(&args.log, &args.binary)?;
    info!(count = offsets.len(), "offsets to list");
    if offsets.is_empty() {
        return Ok(());
    }

    let gdb = match Gdb::locate(&args.binary) {
        Ok(gdb) => gdb,
        Err(error) => {
            warn!("{error:#}, cannot list {} offsets", offsets.len());
            return Ok(());
        }
    };

    let failed = debugger::list_sources(&gdb, &offsets);
    if failed > 0 {
        warn!("{failed} of {} {GDB_PROGRAM} invocations failed", offsets.len());
    }

    Ok(())
}
