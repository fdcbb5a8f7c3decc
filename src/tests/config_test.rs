///
/// @package gflags-rs
///
/// @file Config tests
/// @copyright (c) 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use clap::Parser;
use crate::config::Config;

fn parse(args: &[&str]) -> Config {
    Config::try_parse_from(std::iter::once("gflags").chain(args.iter().copied())).unwrap()
}

#[test]
fn should_parse_destinations() {
    assert!(parse(&["-r"]).registry);
    assert!(parse(&["-k"]).kernel);
    assert_eq!(Some("notepad.exe".to_string()), parse(&["-i", "notepad.exe"]).image);
}

#[test]
fn should_capture_edit_tokens_with_signs() {
    let config = parse(&["-k", "+soe", "-10", "20"]);

    assert!(config.kernel);
    assert_eq!(vec!["+soe", "-10", "20"], config.tokens);
}

#[test]
fn should_require_an_image_name() {
    assert!(Config::try_parse_from(["gflags", "-i"]).is_err());
}

#[test]
fn should_detect_interactive_invocations() {
    assert!(parse(&[]).is_interactive());
    assert!(parse(&["-D"]).is_interactive());
    assert!(!parse(&["-k"]).is_interactive());
    assert!(!parse(&["--license"]).is_interactive());
}

#[test]
fn should_parse_logging_options() {
    let config = parse(&["-D", "-l", "debug"]);

    assert!(config.debug);
    assert_eq!("debug", config.loglevel);
}
