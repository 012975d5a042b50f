#![no_main]

//! Geometry fuzzer.
//!
//! Walks arbitrary coordinates on arbitrary boards and checks that every
//! step stays on a playable cell of the board.

use arbitrary::Arbitrary;
use crosstrack::{CellKind, Coord, Geometry};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct GeometryInput {
    size: u16,
    x: u16,
    y: u16,
    steps: u8,
}

fuzz_target!(|input: GeometryInput| {
    let size = input.size % 256;
    let Ok(geometry) = Geometry::new(size) else {
        assert!(size < 5 || size % 2 == 0, "valid size {size} rejected");
        return;
    };

    let mut pos = Coord::new(input.x, input.y);
    let kind = geometry.classify(pos);
    if !geometry.in_bounds(pos) {
        assert_eq!(kind, CellKind::Empty);
    }
    if let Some(entry) = geometry.home_entry(pos) {
        assert!(geometry.is_edge(pos));
        assert_eq!(geometry.classify(entry), CellKind::Home);
    }

    for _ in 0..input.steps {
        let Some(next) = geometry.advance(pos) else {
            break;
        };
        assert!(geometry.in_bounds(next));
        let before = geometry.classify(pos);
        let after = geometry.classify(next);
        assert!(after.is_playable(), "stepped onto {after:?} at {next}");
        assert_eq!(before, after, "left the {before:?} cells at {pos}");
        pos = next;
    }
});
