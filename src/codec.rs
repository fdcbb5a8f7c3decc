///
/// @package gflags-rs
///
/// @file Flag codec functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use log::warn;
use crate::flags::{FlagInfo, FlagTable};

/// A single edit decoded from a command-line token
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Edit {
    /// OR the bits into the working value
    Set(u32),
    /// AND-NOT the bits out of the working value
    Clear(u32),
    /// Replace the working value wholesale, discarding prior edits
    Replace(u32),
}

/// Decode a token into an [`Edit`]
///
/// Strategies are tried in a fixed tie-break order: flag abbreviation first,
/// hex literal second, zero-valued literal last. The last strategy never
/// fails, so every token decodes to something; a token that only matches the
/// zero fallback is reported via the log.
///
/// # Arguments
///
/// * `table` - Flag table used to resolve abbreviations
/// * `token` - Token of the form `+abbr`, `-abbr`, `+hex`, `-hex` or `hex`
pub(crate) fn parse_token(table: &FlagTable, token: &str) -> Edit {
    try_abbrev(table, token)
        .or_else(|| try_literal(token))
        .unwrap_or_else(|| {
            warn!("Unrecognized flag token `{}', treating it as zero", token);

            zero_literal(token)
        })
}

/// Fold a token into the working value
pub(crate) fn parse_delta(table: &FlagTable, token: &str, current: u32) -> u32 {
    apply(current, parse_token(table, token))
}

pub(crate) fn apply(value: u32, edit: Edit) -> u32 {
    match edit {
        Edit::Set(bits) => value | bits,
        Edit::Clear(bits) => value & !bits,
        Edit::Replace(bits) => bits,
    }
}

/// All set flags of a value in table declaration order
pub(crate) fn render<'a>(table: &'a FlagTable, value: u32) -> impl Iterator<Item = &'static FlagInfo> + 'a {
    table.iter().filter(move |info| 0 != value & info.bit())
}

/// Strategy 1: a signed abbreviation resolved through the flag table
fn try_abbrev(table: &FlagTable, token: &str) -> Option<Edit> {
    if let Some(abbr) = token.strip_prefix('+') {
        table.lookup(abbr).map(|info| Edit::Set(info.bit()))
    } else if let Some(abbr) = token.strip_prefix('-') {
        table.lookup(abbr).map(|info| Edit::Clear(info.bit()))
    } else {
        None
    }
}

/// Strategy 2: a hex literal, signed as a delta or bare as a reset
fn try_literal(token: &str) -> Option<Edit> {
    if let Some(body) = token.strip_prefix('+') {
        parse_hex_prefix(body).map(Edit::Set)
    } else if let Some(body) = token.strip_prefix('-') {
        parse_hex_prefix(body).map(Edit::Clear)
    } else {
        parse_hex_prefix(token).map(Edit::Replace)
    }
}

/// Strategy 3: the permissive fallback, a zero-valued literal
fn zero_literal(token: &str) -> Edit {
    if token.starts_with('+') {
        Edit::Set(0)
    } else if token.starts_with('-') {
        Edit::Clear(0)
    } else {
        Edit::Replace(0)
    }
}

/// Parse the longest valid hex prefix, ignoring trailing garbage
///
/// Returns [`None`] when no leading hex digit exists; a prefix that
/// overflows 32 bits saturates
fn parse_hex_prefix(body: &str) -> Option<u32> {
    let digits = body.chars()
        .take_while(char::is_ascii_hexdigit)
        .count();

    if 0 == digits {
        return None;
    }

    let mut value: u32 = 0;

    for digit in body[..digits].chars() {
        let nibble = digit.to_digit(16).unwrap_or(0);

        value = match value.checked_mul(16).and_then(|v| v.checked_add(nibble)) {
            Some(next) => next,
            None => return Some(u32::MAX),
        };
    }

    Some(value)
}
