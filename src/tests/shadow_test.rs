///
/// @package gflags-rs
///
/// @file Shadow store tests
/// @copyright (c) 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::env;
use std::fs;
use std::path::PathBuf;
use crate::shadow::ShadowStore;
use crate::store::FlagStore;

fn state_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("gflags-test-{}-{}.state", std::process::id(), name))
}

struct Cleanup(PathBuf);

impl Drop for Cleanup {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn should_read_absent_file_as_clear() {
    let path = state_path("absent");
    let store = ShadowStore::new(path);

    assert_eq!(0, store.read_registry().unwrap());
    assert_eq!(0, store.read_kernel().unwrap());
    assert_eq!(0, store.read_image("notepad.exe").unwrap());
}

#[test]
fn should_round_trip_state() {
    let path = state_path("roundtrip");
    let _cleanup = Cleanup(path.clone());
    let mut store = ShadowStore::new(path);

    store.write_registry(0x10).unwrap();
    store.write_kernel(0x20000500).unwrap();
    store.write_image("notepad.exe", 0x1).unwrap();

    assert_eq!(0x10, store.read_registry().unwrap());
    assert_eq!(0x20000500, store.read_kernel().unwrap());
    assert_eq!(0x1, store.read_image("notepad.exe").unwrap());
    assert_eq!(0, store.read_image("absent.exe").unwrap());
}

#[test]
fn should_keep_other_entries_on_write() {
    let path = state_path("keep");
    let _cleanup = Cleanup(path.clone());
    let mut store = ShadowStore::new(path);

    store.write_image("first.exe", 0x1).unwrap();
    store.write_image("second.exe", 0x2).unwrap();
    store.write_registry(0x400).unwrap();

    assert_eq!(0x1, store.read_image("first.exe").unwrap());
    assert_eq!(0x2, store.read_image("second.exe").unwrap());
    assert_eq!(0x400, store.read_registry().unwrap());
}

#[test]
fn should_reject_malformed_state() {
    let path = state_path("malformed");
    let _cleanup = Cleanup(path.clone());

    fs::write(&path, "registry=zz\n").unwrap();

    let store = ShadowStore::new(path);

    assert!(store.read_registry().is_err());
}

#[test]
fn should_reject_lines_without_separator() {
    let path = state_path("separator");
    let _cleanup = Cleanup(path.clone());

    fs::write(&path, "registry\n").unwrap();

    let store = ShadowStore::new(path);

    assert!(store.read_registry().is_err());
}

#[test]
fn should_skip_comments_and_unknown_keys() {
    let path = state_path("comments");
    let _cleanup = Cleanup(path.clone());

    fs::write(&path, "# state\nregistry=00000010\nbogus=1\n").unwrap();

    let store = ShadowStore::new(path);

    assert_eq!(0x10, store.read_registry().unwrap());
}
