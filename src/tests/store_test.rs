///
/// @package gflags-rs
///
/// @file Flag store tests
/// @copyright (c) 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use crate::flags::Destination;
use crate::store::{self, Selection};
use crate::tests::MemStore;

#[test]
fn should_short_circuit_empty_image_name() {
    let store = MemStore { fail_reads: true, ..Default::default() };

    let unset = Selection::new(Destination::Image, None);
    let empty = Selection::new(Destination::Image, Some(String::new()));

    assert_eq!(0, store::read_current(&store, &unset).unwrap());
    assert_eq!(0, store::read_current(&store, &empty).unwrap());
    assert_eq!(0, store.reads.get());
}

#[test]
fn should_read_missing_image_as_clear() {
    let store = MemStore::default();
    let selection = Selection::new(Destination::Image, Some("absent.exe".to_string()));

    assert_eq!(0, store::read_current(&store, &selection).unwrap());
    assert_eq!(1, store.reads.get());
}

#[test]
fn should_round_trip_values() {
    let mut store = MemStore::default();

    let registry = Selection::new(Destination::Registry, None);
    let kernel = Selection::new(Destination::Kernel, None);
    let image = Selection::new(Destination::Image, Some("notepad.exe".to_string()));

    store::write_current(&mut store, &registry, 0x10).unwrap();
    store::write_current(&mut store, &kernel, 0x20).unwrap();
    store::write_current(&mut store, &image, 0x1).unwrap();

    assert_eq!(0x10, store::read_current(&store, &registry).unwrap());
    assert_eq!(0x20, store::read_current(&store, &kernel).unwrap());
    assert_eq!(0x1, store::read_current(&store, &image).unwrap());
}

#[test]
fn should_propagate_read_failures() {
    let store = MemStore { fail_reads: true, ..Default::default() };

    assert!(store::read_current(&store, &Selection::new(Destination::Registry, None)).is_err());
    assert!(store::read_current(&store, &Selection::new(Destination::Kernel, None)).is_err());
}

#[test]
fn should_not_special_case_image_writes() {
    let mut store = MemStore::default();
    let unset = Selection::new(Destination::Image, None);

    store::write_current(&mut store, &unset, 0x1).unwrap();

    assert_eq!(1, store.writes);
    assert_eq!(Some(&0x1), store.images.get(""));
}

#[test]
fn should_format_selections() {
    let registry = Selection::new(Destination::Registry, None);
    let image = Selection::new(Destination::Image, Some("notepad.exe".to_string()));

    assert_eq!("Boot Registry", registry.to_string());
    assert_eq!("Image File `notepad.exe'", image.to_string());
}
