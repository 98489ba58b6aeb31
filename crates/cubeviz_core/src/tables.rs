//! Elementary cycle tables.
//!
//! The slot permutation caused by turning one layer depends only on how the
//! layer intersects an orbit, not on the size of the cube or the exact ranks
//! involved. Each [`TableKind`] names one such intersection pattern. The
//! tables are derived once from the geometry of a reference cube large
//! enough that every pattern occurs with distinct ranks.

use std::collections::HashMap;

use cubeviz_notation::{FACE_COUNT, Face};
use smallvec::SmallVec;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::OrbitKind;
use crate::geometry::{Point, grid_to_point, layer_depth, rotate_point, slot_grid_position};

/// Size of the cube that tables are derived from.
const REF_SIZE: u16 = 9;
/// Rank of the middle layer of the reference cube.
const REF_MIDDLE: u16 = REF_SIZE / 2;

/// Slot indices of one cycle within an orbit.
pub(crate) type SlotCycle = SmallVec<[u16; 4]>;

/// Cycles indexed by face and then by turn count.
type Table = [[Vec<SlotCycle>; 4]; FACE_COUNT];

lazy_static! {
    static ref TABLES: Vec<Table> = TableKind::iter().map(build_table).collect();
}

/// Way that a layer can intersect an orbit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumCount, EnumIter, strum::Display)]
pub(crate) enum TableKind {
    /// Outer layer through corners.
    CornerOuter,
    /// Outer layer through midges.
    MidgeOuter,
    /// Middle layer through midges.
    MidgeMiddle,
    /// Middle layer through centers.
    CenterMiddle,
    /// Outer layer through wings of any rank.
    WingOuter,
    /// Inner layer through wings of the same rank.
    WingInner,
    /// Outer layer through big centers, which turns them on the face itself.
    CenterBigOuter,
    /// Inner layer through X-centers of the same rank.
    CenterBigXCenter,
    /// Inner layer matching the first rank of a big center.
    CenterBigDirect,
    /// Inner layer matching the second rank of a big center.
    CenterBigIndirect,
    /// Middle layer through big centers whose second rank is the middle.
    CenterBigMiddle,
}

impl TableKind {
    /// Returns the orbit and 0-indexed layer on the reference cube that this
    /// table is derived from.
    pub(crate) fn reference(self) -> (OrbitKind, u16) {
        use OrbitKind::*;

        match self {
            TableKind::CornerOuter => (Corner, 0),
            TableKind::MidgeOuter => (Midge, 0),
            TableKind::MidgeMiddle => (Midge, REF_MIDDLE),
            TableKind::CenterMiddle => (Center, REF_MIDDLE),
            TableKind::WingOuter => (Wing { rank: 1 }, 0),
            TableKind::WingInner => (Wing { rank: 1 }, 1),
            TableKind::CenterBigOuter => (CenterBig { ranks: [1, 3] }, 0),
            TableKind::CenterBigXCenter => (CenterBig { ranks: [2, 2] }, 2),
            TableKind::CenterBigDirect => (CenterBig { ranks: [1, 3] }, 1),
            TableKind::CenterBigIndirect => (CenterBig { ranks: [3, 1] }, 1),
            TableKind::CenterBigMiddle => (CenterBig { ranks: [1, REF_MIDDLE] }, REF_MIDDLE),
        }
    }
}

/// Returns the cycles for turning a layer of kind `table` clockwise around
/// `face` by `turn_count` quarter turns.
pub(crate) fn cycles(table: TableKind, face: Face, turn_count: u8) -> &'static [SlotCycle] {
    &TABLES[table as usize][face.index()][usize::from(turn_count % 4)]
}

fn build_table(table: TableKind) -> Table {
    let (orbit, depth) = table.reference();
    std::array::from_fn(|f| {
        let quarter_turn = layer_permutation(orbit, Face::ALL[f], depth);
        let mut power: Vec<u16> = (0..).take(quarter_turn.len()).collect();
        std::array::from_fn(|_| {
            let ret = permutation_cycles(&power);
            power = power.iter().map(|&i| quarter_turn[usize::from(i)]).collect();
            ret
        })
    })
}

/// Returns the permutation of slots caused by a clockwise quarter turn of
/// one layer of the reference cube. Entry `i` is the slot that the sticker
/// in slot `i` moves to.
pub(crate) fn layer_permutation(orbit: OrbitKind, face: Face, depth: u16) -> Vec<u16> {
    let points: Vec<Point> = (0..orbit.slot_count())
        .map(|slot| {
            let (f, row, col) = slot_grid_position(orbit, slot, REF_SIZE);
            grid_to_point(f, row, col, REF_SIZE)
        })
        .collect();
    let slot_at: HashMap<Point, u16> = points.iter().copied().zip(0..).collect();

    points
        .iter()
        .zip(0..)
        .map(|(&p, slot)| {
            if layer_depth(face, p, REF_SIZE) != depth {
                return slot;
            }
            let target = slot_at.get(&rotate_point(face, p)).copied();
            debug_assert!(target.is_some(), "rotated sticker left its {orbit} orbit");
            target.unwrap_or(slot)
        })
        .collect()
}

/// Decomposes a permutation into its nontrivial cycles, each starting from
/// its lowest slot.
fn permutation_cycles(permutation: &[u16]) -> Vec<SlotCycle> {
    let mut seen = vec![false; permutation.len()];
    let mut ret = vec![];
    for start in (0..).take(permutation.len()) {
        let mut i: u16 = start;
        if seen[usize::from(i)] || permutation[usize::from(i)] == i {
            continue;
        }
        let mut cycle = SlotCycle::new();
        while !seen[usize::from(i)] {
            seen[usize::from(i)] = true;
            cycle.push(i);
            i = permutation[usize::from(i)];
        }
        ret.push(cycle);
    }
    ret
}

#[cfg(test)]
pub(crate) fn all_cycles(table: TableKind) -> &'static Table {
    &TABLES[table as usize]
}
