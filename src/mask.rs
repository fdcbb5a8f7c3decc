///
/// @package gflags-rs
///
/// @file Destination mask functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::fmt;
use crate::flags::{Dest, Destination, FlagTable};

/// Per-destination masks of recognized flag bits
///
/// Computed once at startup from the flag table and threaded into every
/// caller; the masks are a pure function of the table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Masks {
    registry: u32,
    kernel: u32,
    image: u32,
}

/// Result of masking a raw value for a destination
///
/// `applied` and `ignored` partition the raw value; bits outside the valid
/// mask are never rejected, only reported so the caller can warn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Masked {
    pub(crate) applied: u32,
    pub(crate) ignored: u32,
}

impl Masks {
    /// OR-reduce the flag bits over all entries per destination
    pub(crate) fn from_table(table: &FlagTable) -> Self {
        let mut masks = Self { registry: 0, kernel: 0, image: 0 };

        for info in table.iter() {
            if info.dest.contains(Dest::REGISTRY) {
                masks.registry |= info.bit();
            }
            if info.dest.contains(Dest::KERNEL) {
                masks.kernel |= info.bit();
            }
            if info.dest.contains(Dest::IMAGE) {
                masks.image |= info.bit();
            }
        }

        masks
    }

    pub(crate) fn valid(&self, dest: Destination) -> u32 {
        match dest {
            Destination::Registry => self.registry,
            Destination::Kernel => self.kernel,
            Destination::Image => self.image,
        }
    }

    /// Split a raw value into the bits legal for a destination and the rest
    pub(crate) fn apply(&self, raw: u32, dest: Destination) -> Masked {
        let mask = self.valid(dest);

        Masked {
            applied: raw & mask,
            ignored: raw & !mask,
        }
    }
}

impl fmt::Display for Masks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(registry={:08x}, kernel={:08x}, image={:08x})",
               self.registry, self.kernel, self.image)
    }
}
