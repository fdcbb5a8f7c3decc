///
/// @package gflags-rs
///
/// @file Flag store functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::fmt;
use anyhow::Result;
use crate::flags::Destination;

/// Capability interface over the three flag locations
///
/// Every operation is a single blocking call; nothing is retried and a
/// failure surfaces as an error the caller decides on.
pub(crate) trait FlagStore {
    fn read_registry(&self) -> Result<u32>;
    fn write_registry(&mut self, value: u32) -> Result<()>;

    fn read_kernel(&self) -> Result<u32>;
    fn write_kernel(&mut self, value: u32) -> Result<()>;

    fn read_image(&self, image: &str) -> Result<u32>;
    fn write_image(&mut self, image: &str, value: u32) -> Result<()>;
}

/// A chosen destination plus the image name the image destination needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selection {
    pub(crate) dest: Destination,
    pub(crate) image: Option<String>,
}

impl Selection {
    pub(crate) fn new(dest: Destination, image: Option<String>) -> Self {
        Self { dest, image }
    }

    fn image_name(&self) -> &str {
        self.image.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.image {
            Some(ref image) => write!(f, "{} `{}'", self.dest, image),
            None => write!(f, "{}", self.dest),
        }
    }
}

/// Read the current value of a selection
///
/// An unset or empty image name short-circuits to all flags clear without
/// touching storage, so a missing name never causes an error.
pub(crate) fn read_current(store: &dyn FlagStore, selection: &Selection) -> Result<u32> {
    match selection.dest {
        Destination::Registry => store.read_registry(),
        Destination::Kernel => store.read_kernel(),
        Destination::Image => {
            let image = selection.image_name();

            if image.is_empty() {
                Ok(0)
            } else {
                store.read_image(image)
            }
        }
    }
}

/// Write a value to a selection
///
/// Unlike [`read_current`] the image write is not special-cased for an
/// empty name; the backend decides what to make of it.
pub(crate) fn write_current(store: &mut dyn FlagStore, selection: &Selection, value: u32) -> Result<()> {
    match selection.dest {
        Destination::Registry => store.write_registry(value),
        Destination::Kernel => store.write_kernel(value),
        Destination::Image => store.write_image(selection.image_name(), value),
    }
}
