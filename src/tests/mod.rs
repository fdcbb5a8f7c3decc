///
/// @package gflags-rs
///
/// @file Test modules
/// @copyright (c) 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::cell::Cell;
use std::collections::HashMap;
use anyhow::{anyhow, Result};
use crate::store::FlagStore;

mod store_test;
mod shadow_test;
mod config_test;

/// In-memory store double for the presentation tests
#[derive(Default)]
pub(crate) struct MemStore {
    pub(crate) registry: u32,
    pub(crate) kernel: u32,
    pub(crate) images: HashMap<String, u32>,
    pub(crate) fail_reads: bool,
    pub(crate) fail_writes: bool,
    pub(crate) reads: Cell<usize>,
    pub(crate) writes: usize,
}

impl MemStore {
    fn read(&self, value: u32) -> Result<u32> {
        self.reads.set(self.reads.get() + 1);

        if self.fail_reads {
            Err(anyhow!("read denied"))
        } else {
            Ok(value)
        }
    }

    fn check_write(&mut self) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow!("write denied"));
        }

        self.writes += 1;

        Ok(())
    }
}

impl FlagStore for MemStore {
    fn read_registry(&self) -> Result<u32> {
        self.read(self.registry)
    }

    fn write_registry(&mut self, value: u32) -> Result<()> {
        self.check_write()?;
        self.registry = value;

        Ok(())
    }

    fn read_kernel(&self) -> Result<u32> {
        self.read(self.kernel)
    }

    fn write_kernel(&mut self, value: u32) -> Result<()> {
        self.check_write()?;
        self.kernel = value;

        Ok(())
    }

    fn read_image(&self, image: &str) -> Result<u32> {
        self.read(self.images.get(image).copied().unwrap_or_default())
    }

    fn write_image(&mut self, image: &str, value: u32) -> Result<()> {
        self.check_write()?;
        self.images.insert(image.to_string(), value);

        Ok(())
    }
}
