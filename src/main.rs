///
/// @package gflags-rs
///
/// @file Main functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

mod flags;
mod mask;
mod codec;
mod store;
mod shadow;
mod console;
mod editor;
mod logger;
mod config;

#[cfg(test)]
mod tests;

use std::io;
use std::process;
use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use crate::config::Config;
use crate::flags::FlagTable;
use crate::mask::Masks;
use crate::shadow::ShadowStore;

fn print_version(table: &FlagTable) {
    info!("{} {} - Copyright (c) 2025-present {}",
        env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), env!("CARGO_PKG_AUTHORS"));
    info!("Released under the GNU Public License");
    info!("{} global flags known", table.len());
}

fn main() -> Result<()> {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(err) => {
            let _ = err.print();

            process::exit(1);
        }
    };

    logger::init(&config)?;

    debug!("Config: {:?}", config);

    let table = FlagTable::builtin();
    let masks = Masks::from_table(&table);
    let mut store = ShadowStore::open_default();

    debug!("Masks: {}", masks);

    let code = if config.is_interactive() {
        print_version(&table);

        editor::run(&table, &masks, &mut store, io::stdin().lock(), io::stdout())?;

        0
    } else {
        console::run(&config, &table, &masks, &mut store)?
    };

    if 0 != code {
        process::exit(code);
    }

    Ok(())
}
