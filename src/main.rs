//! Bess Discount function host
//!
//! Reads a cart input document from a file or stdin and writes the discount decision to stdout.

use std::io;

use anyhow::Result;

use bess_discount::host::{self, HostConfig, logging::init_subscriber};

fn main() -> Result<()> {
    let config = HostConfig::load().unwrap_or_else(|err| err.exit());

    init_subscriber(&config.logging)?;

    host::run(&config, io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
