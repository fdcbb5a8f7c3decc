///
/// @package gflags-rs
///
/// @file Shadow store functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use stdext::function_name;
use crate::store::FlagStore;

const STATE_ENV: &str = "GFLAGS_STATE";
const STATE_FILE: &str = "gflags-rs.state";

const REGISTRY_KEY: &str = "registry";
const KERNEL_KEY: &str = "kernel";
const IMAGE_PREFIX: &str = "image/";

/// File-backed stand-in for the native flag transports
///
/// One line per value, `<key>=<8 hex digits>`, with per-image entries keyed
/// by image name. The OS-native registry and kernel adapters live behind
/// [`FlagStore`] outside this crate; the shadow store keeps the tool fully
/// operational without them.
#[derive(Debug, Clone)]
pub(crate) struct ShadowStore {
    path: PathBuf,
}

#[derive(Default, Debug)]
struct State {
    registry: u32,
    kernel: u32,
    images: BTreeMap<String, u32>,
}

impl ShadowStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Open the store at `GFLAGS_STATE` or the default location
    pub(crate) fn open_default() -> Self {
        let path = env::var_os(STATE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join(STATE_FILE));

        debug!("{}: path={:?}", function_name!(), path);

        Self::new(path)
    }

    /// Load the whole state file; an absent file reads as all flags clear
    fn load(&self) -> Result<State> {
        if !self.path.exists() {
            return Ok(State::default());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read state file {:?}", self.path))?;

        let mut state = State::default();

        for line in text.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, hex) = line.split_once('=')
                .ok_or_else(|| anyhow!("Malformed state line `{}'", line))?;
            let value = u32::from_str_radix(hex.trim(), 16)
                .with_context(|| format!("Malformed state value `{}'", hex))?;

            match key.trim() {
                REGISTRY_KEY => state.registry = value,
                KERNEL_KEY => state.kernel = value,
                key => {
                    if let Some(image) = key.strip_prefix(IMAGE_PREFIX) {
                        state.images.insert(image.to_string(), value);
                    } else {
                        warn!("Skipping unknown state key `{}'", key);
                    }
                }
            }
        }

        Ok(state)
    }

    fn save(&self, state: &State) -> Result<()> {
        let mut text = String::new();

        text.push_str(&format!("{}={:08x}\n", REGISTRY_KEY, state.registry));
        text.push_str(&format!("{}={:08x}\n", KERNEL_KEY, state.kernel));

        for (image, value) in state.images.iter() {
            text.push_str(&format!("{}{}={:08x}\n", IMAGE_PREFIX, image, value));
        }

        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write state file {:?}", self.path))?;

        debug!("{}: path={:?}", function_name!(), self.path);

        Ok(())
    }
}

impl FlagStore for ShadowStore {
    fn read_registry(&self) -> Result<u32> {
        Ok(self.load()?.registry)
    }

    fn write_registry(&mut self, value: u32) -> Result<()> {
        let mut state = self.load()?;

        state.registry = value;

        self.save(&state)
    }

    fn read_kernel(&self) -> Result<u32> {
        Ok(self.load()?.kernel)
    }

    fn write_kernel(&mut self, value: u32) -> Result<()> {
        let mut state = self.load()?;

        state.kernel = value;

        self.save(&state)
    }

    fn read_image(&self, image: &str) -> Result<u32> {
        // A missing entry reads as all clear, like a missing registry key
        Ok(self.load()?.images.get(image).copied().unwrap_or_default())
    }

    fn write_image(&mut self, image: &str, value: u32) -> Result<()> {
        let mut state = self.load()?;

        state.images.insert(image.to_string(), value);

        self.save(&state)
    }
}
