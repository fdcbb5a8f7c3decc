///
/// @package gflags-rs
///
/// @file Config functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gflags", disable_version_flag = true,
    about = "gflags - the global flags editor")]
pub(crate) struct Config {
    /// Operate on flags in the system registry
    #[arg(short = 'r', long)]
    pub(crate) registry: bool,

    /// Operate on flags of the running kernel
    #[arg(short = 'k', long)]
    pub(crate) kernel: bool,

    /// Operate on flags for a specific image
    #[arg(short = 'i', long, value_name = "IMAGE")]
    pub(crate) image: Option<String>,

    /// Show the license
    #[arg(long)]
    pub(crate) license: bool,

    /// Set logging level LEVEL
    #[arg(short = 'l', long = "level", value_name = "LEVEL", default_value = "")]
    pub(crate) loglevel: String,

    /// Print debugging messages
    #[arg(short = 'D', long)]
    pub(crate) debug: bool,

    /// Flag edits: a bare hex value, or +/- followed by an abbreviation
    /// or a hex value
    #[arg(value_name = "FLAGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub(crate) tokens: Vec<String>,
}

impl Config {
    /// Whether the invocation asks for the interactive editor
    pub(crate) fn is_interactive(&self) -> bool {
        !self.registry && !self.kernel && self.image.is_none()
            && !self.license && self.tokens.is_empty()
    }
}
