use std::collections::HashMap;

use pretty_assertions::assert_eq;

use super::*;
use crate::geometry::{grid_to_point, layer_depth, rotate_point, slot_grid_position};

/// Computes the permutation of an orbit caused by a clockwise quarter turn of
/// one 0-indexed layer directly from the geometry of the cube.
fn geometric_permutation(kind: OrbitKind, face: Face, depth: u16, n: u16) -> Vec<u16> {
    let points: Vec<_> = (0..kind.slot_count())
        .map(|slot| {
            let (f, row, col) = slot_grid_position(kind, slot, n);
            grid_to_point(f, row, col, n)
        })
        .collect();
    let slot_at: HashMap<_, u16> = points.iter().copied().zip(0..).collect();
    points
        .iter()
        .zip(0..)
        .map(|(&p, slot)| match layer_depth(face, p, n) == depth {
            true => slot_at[&rotate_point(face, p)],
            false => slot,
        })
        .collect()
}

fn compiled_permutation(kind: OrbitKind, cycles: &[Cycle]) -> Vec<u16> {
    let mut ret: Vec<u16> = (0..).take(kind.slot_count()).collect();
    for cycle in cycles.iter().filter(|cycle| cycle.kind == kind) {
        for (i, &slot) in cycle.indices.iter().enumerate() {
            ret[usize::from(slot)] = cycle.indices[(i + 1) % cycle.len()];
        }
    }
    ret
}

#[test]
fn test_compiled_cycles_match_geometry() {
    for n in 1..=9 {
        let geometry = Geometry::new(n);
        let inventory = orbit_inventory(n);
        for face in Face::ALL {
            for layer in 1..=n {
                let mv = Move::new(face, [layer, layer], 1);
                let cycles = compile_move(&mv, &geometry, &inventory).unwrap();
                for &kind in &inventory {
                    assert_eq!(
                        geometric_permutation(kind, face, layer - 1, n),
                        compiled_permutation(kind, &cycles),
                        "{kind} for layer {layer} of {face} on {n}x{n}x{n}",
                    );
                }
            }
        }
    }
}

#[test]
fn test_slots_cover_every_sticker_once() {
    for n in 1..=9 {
        let mut seen = HashMap::new();
        for kind in orbit_inventory(n) {
            for slot in 0..kind.slot_count() {
                let pos = slot_grid_position(kind, slot, n);
                assert!(pos.1 < n && pos.2 < n, "{kind} slot {slot} on {n}");
                if let Some(other) = seen.insert(pos, (kind, slot)) {
                    panic!("{kind} slot {slot} overlaps {other:?} on {n}");
                }
            }
        }
        assert_eq!(6 * usize::from(n) * usize::from(n), seen.len());
    }
}

#[test]
fn test_slots_go_clockwise_around_face() {
    let kind = OrbitKind::CenterBig { ranks: [1, 2] };
    let positions: Vec<_> = (4..8).map(|slot| slot_grid_position(kind, slot, 5)).collect();
    assert_eq!(
        vec![
            (Face::F, 1, 2),
            (Face::F, 2, 3),
            (Face::F, 3, 2),
            (Face::F, 2, 1),
        ],
        positions,
    );

    let kind = OrbitKind::Wing { rank: 1 };
    let positions: Vec<_> = (0..4).map(|slot| slot_grid_position(kind, slot, 4)).collect();
    assert_eq!(
        vec![(Face::U, 0, 1), (Face::U, 0, 2), (Face::U, 1, 3), (Face::U, 2, 3)],
        positions,
    );
}

#[test]
fn test_identity_move_compiles_to_nothing() {
    let geometry = Geometry::new(5);
    let mv = Move::new(Face::R, [1, 3], 4);
    assert_eq!(Ok(vec![]), compile_move(&mv, &geometry, &orbit_inventory(5)));
}

#[test]
fn test_slice_out_of_range() {
    let geometry = Geometry::new(3);
    let inventory = orbit_inventory(3);
    for slices in [[1, 4], [0, 1], [4, 4]] {
        let mv = Move::new(Face::U, slices, 1);
        assert_eq!(
            Err(StateError::SliceOutOfRange {
                begin: mv.slice_begin,
                end: mv.slice_end,
                puzzle_size: 3,
            }),
            compile_move(&mv, &geometry, &inventory),
        );
    }
}

#[test]
fn test_missing_orbits_are_skipped() {
    let geometry = Geometry::new(3);
    let inventory = OrbitInventory::from([OrbitKind::Corner]);
    let cycles = compile_move(&Move::new(Face::R, [1, 1], 1), &geometry, &inventory).unwrap();
    assert_eq!(3, cycles.len());
    assert!(cycles.iter().all(|c| c.kind == OrbitKind::Corner && c.len() == 4));

    let inventory = OrbitInventory::from([OrbitKind::Wing { rank: 1 }]);
    let cycles = compile_move(&Move::new(Face::R, [2, 2], 1), &geometry, &inventory).unwrap();
    assert_eq!(Vec::<Cycle>::new(), cycles);
}

#[test]
fn test_deep_layer_compiles_like_mirrored_layer() {
    let geometry = Geometry::new(7);
    let inventory = orbit_inventory(7);
    let compile = |mv: Move| compile_move(&mv, &geometry, &inventory).unwrap();

    let near = parse_notation_move("2R", 7);
    assert_eq!(Move::new(Face::R, [2, 2], 1), near);
    assert_eq!(compile(near), compile(Move::new(Face::L, [6, 6], 3)));
    assert_eq!(compile(near), compile(parse_notation_move("6L'", 7)));

    assert_eq!(
        compile(Move::new(Face::U, [1, 1], 2)),
        compile(Move::new(Face::D, [7, 7], 2)),
    );
}

#[test]
fn test_wide_move_is_sum_of_layers() {
    let geometry = Geometry::new(5);
    let inventory = orbit_inventory(5);
    let compile = |mv: Move| compile_move(&mv, &geometry, &inventory).unwrap();

    let mut outer_then_inner = compile(parse_notation_move("R", 5));
    outer_then_inner.extend(compile(parse_notation_move("2R", 5)));
    assert_eq!(outer_then_inner, compile(parse_notation_move("Rw", 5)));
}

#[test]
fn test_every_big_center_orbit_is_reachable() {
    for n in [6, 7, 8, 9] {
        let geometry = Geometry::new(n);
        let inventory = orbit_inventory(n);
        for kind in inventory.iter().filter(|k| matches!(k, OrbitKind::CenterBig { .. })) {
            for layer in 2..n {
                let mv = Move::new(Face::R, [layer, layer], 1);
                let cycles = compile_move(&mv, &geometry, &inventory).unwrap();
                let moved = cycles.iter().filter(|c| c.kind == *kind).count();
                let OrbitKind::CenterBig { ranks: [r1, r2] } = *kind else {
                    unreachable!()
                };
                let depth = layer.min(n + 1 - layer) - 1;
                let expected = if Some(layer) == geometry.middle_slice() {
                    if Some(r2) == geometry.middle_rank() { 2 } else { 0 }
                } else {
                    match (r1 == depth, r2 == depth) {
                        (true, true) => 2,
                        (true, false) | (false, true) => 1,
                        (false, false) => 0,
                    }
                };
                assert_eq!(expected, moved, "{kind} for layer {layer} on {n}x{n}x{n}");
            }
        }
    }
}

fn parse_notation_move(token: &str, n: u16) -> Move {
    cubeviz_notation::parse_move(token, n).unwrap()
}
