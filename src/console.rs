///
/// @package gflags-rs
///
/// @file Console functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::io::{self, Write};
use anyhow::{anyhow, Result};
use itertools::Itertools;
use log::{debug, warn};
use stdext::function_name;
use crate::codec;
use crate::config::Config;
use crate::flags::{Destination, FlagTable};
use crate::mask::Masks;
use crate::store::{self, FlagStore, Selection};

const USAGE: &str = "
usage: gflags [-i <IMAGE> [<flags>]]
       gflags [-k [<flags>]]
       gflags [-r [<flags>]]

where: -i operates on flags for a specific image.
          this mode also requires an image name to operate on.
       -k operates on flags of the running kernel.
       -r operates on flags in the system registry.

       If only -r, -k or -i are specified, then the current
       flags are displayed.
       If no arguments are specified, gflags will start the
       interactive editor.

       Flags can either be a hex number, or a combination of the
       abbreviations listed below. Prefix a number or an abbrev
       with a + to set the bits, or with a - to remove the bits.
       Valid abbreviations are:
";

const LICENSE: &str = "
gflags - the global flags editor
Copyright (c) 2025-present Christoph Kappel <christoph@unexist.dev>

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
GNU General Public License for more details.
";

/// Print usage text plus the abbreviation table
pub(crate) fn print_usage(out: &mut dyn Write, table: &FlagTable) -> Result<()> {
    let abbrevs = table.iter()
        .map(|info| format!("       {} - {}", info.abbr, info.desc))
        .join("\n");

    writeln!(out, "{}{}", USAGE, abbrevs)?;

    Ok(())
}

pub(crate) fn show_license(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", LICENSE.trim_start())?;

    Ok(())
}

/// Print a flag value the way the original tool lists it
pub(crate) fn print_flags(out: &mut dyn Write, table: &FlagTable,
    value: u32, dest: Destination) -> Result<()>
{
    writeln!(out, "Current {} Settings are: {:08x}", dest, value)?;

    for info in codec::render(table, value) {
        writeln!(out, "    {} - {}", info.abbr, info.desc)?;
    }

    Ok(())
}

/// Derive the selected destination from the command line
///
/// # Returns
///
/// A `Result` with [`None`] when no destination was selected, the
/// [`Selection`] otherwise; a usage error is an [`anyhow::Error`]
pub(crate) fn select_dest(config: &Config) -> Result<Option<Selection>> {
    let count = usize::from(config.registry) + usize::from(config.kernel)
        + usize::from(config.image.is_some());

    if 1 < count {
        return Err(anyhow!("Only one of the options -r, -k, -i can be specified"));
    }

    if 0 == count {
        return match config.tokens.first() {
            Some(token) => Err(anyhow!("Unexpected argument - `{}'", token)),
            None => Ok(None),
        };
    }

    let selection = if config.registry {
        Selection::new(Destination::Registry, None)
    } else if config.kernel {
        Selection::new(Destination::Kernel, None)
    } else {
        Selection::new(Destination::Image, config.image.clone())
    };

    Ok(Some(selection))
}

fn read_error(dest: Destination) -> &'static str {
    match dest {
        Destination::Registry => "Could not read global flags from registry",
        Destination::Kernel => "Could not read global flags from kernel",
        Destination::Image => "Could not read image flags from registry",
    }
}

fn write_error(dest: Destination) -> &'static str {
    match dest {
        Destination::Registry => "Unable to write flags to registry",
        Destination::Kernel => "Unable to write flags to kernel",
        Destination::Image => "Unable to write image flags",
    }
}

/// Handle a non-interactive invocation
///
/// Reads the current value of the selected destination, folds the edit
/// tokens over it left-to-right, masks the result for the destination and
/// writes it back; without edit tokens the current value is only displayed.
///
/// # Returns
///
/// A `Result` with the process exit code
pub(crate) fn run(config: &Config, table: &FlagTable, masks: &Masks,
    store: &mut dyn FlagStore) -> Result<i32>
{
    debug!("{}: tokens={:?}", function_name!(), config.tokens);

    if config.license {
        show_license(&mut io::stdout().lock())?;
    }

    let selection = match select_dest(config) {
        Ok(Some(selection)) => selection,
        Ok(None) => return Ok(0),
        Err(err) => {
            eprintln!("gflags: {}", err);
            print_usage(&mut io::stderr().lock(), table)?;

            return Ok(1);
        }
    };

    let mut value = match store::read_current(store, &selection) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("gflags: {}: {:#}", read_error(selection.dest), err);

            return Ok(1);
        }
    };

    if config.tokens.is_empty() {
        print_flags(&mut io::stdout().lock(), table, value, selection.dest)?;

        return Ok(0);
    }

    for token in config.tokens.iter() {
        value = codec::parse_delta(table, token, value);
    }

    let masked = masks.apply(value, selection.dest);

    if 0 != masked.ignored {
        warn!("Ignoring flags not valid for {}: {:08x}", selection.dest, masked.ignored);
    }

    if let Err(err) = store::write_current(store, &selection, masked.applied) {
        eprintln!("gflags: {}: {:#}", write_error(selection.dest), err);

        return Ok(1);
    }

    print_flags(&mut io::stdout().lock(), table, masked.applied, selection.dest)?;

    Ok(0)
}
