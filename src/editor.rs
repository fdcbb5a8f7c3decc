///
/// @package gflags-rs
///
/// @file Interactive editor functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::io::{BufRead, Write};
use anyhow::Result;
use log::debug;
use stdext::function_name;
use crate::codec;
use crate::console;
use crate::flags::{Destination, FlagTable};
use crate::mask::Masks;
use crate::store::{self, FlagStore, Selection};

const HELP: &str = "
Commands:
  registry          edit flags in the system registry
  kernel            edit flags of the running kernel
  image <name>      edit flags for a specific image
  <flags>           edit the working value (hex, +abbr, -abbr, +hex, -hex)
  show              show the working value
  list              list all flags valid for the current destination
  apply             write the working value to the current destination
  usage             show command line usage
  license           show the license
  quit              leave the editor
";

/// Working state of one editor page
struct Page {
    selection: Selection,
    value: u32,
}

impl Page {
    /// Enter a page and load its current value
    ///
    /// A failed load is reported and edits start from zero, matching the
    /// behavior of the original dialog
    fn enter(out: &mut dyn Write, store: &dyn FlagStore, selection: Selection) -> Result<Self> {
        let value = match store::read_current(store, &selection) {
            Ok(value) => value,
            Err(err) => {
                writeln!(out, "gflags: Could not read {} flags: {:#}", selection.dest, err)?;

                0
            }
        };

        debug!("{}: selection={}, value={:08x}", function_name!(), selection, value);

        Ok(Self { selection, value })
    }

    /// Whether the page accepts edits; the image page needs a name first
    fn editable(&self) -> bool {
        Destination::Image != self.selection.dest
            || self.selection.image.as_deref().is_some_and(|image| !image.is_empty())
    }
}

fn list_flags(out: &mut dyn Write, table: &FlagTable, page: &Page) -> Result<()> {
    for info in table.iter() {
        if info.dest.contains(page.selection.dest.as_flag()) {
            let mark = if 0 != page.value & info.bit() { 'x' } else { ' ' };

            writeln!(out, "  [{}] {} - {}", mark, info.abbr, info.desc)?;
        }
    }

    Ok(())
}

fn apply_flags(out: &mut dyn Write, masks: &Masks, store: &mut dyn FlagStore,
    page: &mut Page) -> Result<()>
{
    let masked = masks.apply(page.value, page.selection.dest);

    if 0 != masked.ignored {
        writeln!(out, "Ignoring flags not valid for {}: {:08x}",
                 page.selection.dest, masked.ignored)?;
    }

    // A failed write keeps the editor running
    match store::write_current(store, &page.selection, masked.applied) {
        Ok(()) => {
            page.value = masked.applied;

            writeln!(out, "Applied {} Settings: {:08x}", page.selection.dest, masked.applied)?;
        }
        Err(err) => {
            writeln!(out, "gflags: Unable to write flags to {}: {:#}",
                     page.selection.dest, err)?;
        }
    }

    Ok(())
}

/// Run the interactive editor until `quit` or end of input
///
/// # Arguments
///
/// * `table` - Flag table
/// * `masks` - Destination masks derived from the table
/// * `store` - Storage backend
/// * `input` - Command source, usually stdin
/// * `out` - Output sink, usually stdout
pub(crate) fn run(table: &FlagTable, masks: &Masks, store: &mut dyn FlagStore,
    input: impl BufRead, mut out: impl Write) -> Result<()>
{
    writeln!(out, "gflags interactive editor, `help' lists all commands")?;

    // The original dialog opens on the system registry page
    let mut page = Page::enter(&mut out, store,
        Selection::new(Destination::Registry, None))?;

    write!(out, "gflags> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        let (command, rest) = trimmed.split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));

        match command {
            "" => {}
            "registry" => {
                page = Page::enter(&mut out, store,
                    Selection::new(Destination::Registry, None))?;
            }
            "kernel" => {
                page = Page::enter(&mut out, store,
                    Selection::new(Destination::Kernel, None))?;
            }
            "image" => {
                let image = rest.trim();
                let image = if image.is_empty() { None } else { Some(image.to_string()) };

                page = Page::enter(&mut out, store,
                    Selection::new(Destination::Image, image))?;

                if !page.editable() {
                    writeln!(out, "No image name set, `image <name>' enables editing")?;
                }
            }
            "show" => {
                console::print_flags(&mut out, table, page.value, page.selection.dest)?;
            }
            "list" => {
                list_flags(&mut out, table, &page)?;
            }
            "apply" => {
                if page.editable() {
                    apply_flags(&mut out, masks, store, &mut page)?;
                } else {
                    writeln!(out, "Set an image name first: image <name>")?;
                }
            }
            "usage" => {
                console::print_usage(&mut out, table)?;
            }
            "license" => {
                console::show_license(&mut out)?;
            }
            "help" => {
                writeln!(out, "{}", HELP.trim_start())?;
            }
            "quit" | "exit" => break,
            _ => {
                if page.editable() {
                    for token in trimmed.split_whitespace() {
                        page.value = codec::parse_delta(table, token, page.value);
                    }

                    writeln!(out, "Working {} Settings: {:08x}",
                             page.selection.dest, page.value)?;
                } else {
                    writeln!(out, "Set an image name first: image <name>")?;
                }
            }
        }

        write!(out, "gflags> ")?;
        out.flush()?;
    }

    debug!("{}: done", function_name!());

    Ok(())
}
