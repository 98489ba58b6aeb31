//! Layer structure of an NxNxN cube and the integer coordinates used to
//! derive sticker permutations.

use std::collections::BTreeSet;

use cubeviz_notation::{FACE_COUNT, Face};
use itertools::iproduct;

use crate::OrbitKind;

/// Set of orbit kinds present on a puzzle, in canonical order.
pub type OrbitInventory = BTreeSet<OrbitKind>;

/// Layer counts of an NxNxN cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Geometry {
    puzzle_size: u16,
    middle_slice: Option<u16>,
    max_rank_without_middle: u16,
    max_rank_with_middle: u16,
}

impl Geometry {
    /// Computes the geometry of a cube with `puzzle_size` layers along each
    /// axis.
    pub fn new(puzzle_size: u16) -> Self {
        if puzzle_size % 2 == 1 {
            Self {
                puzzle_size,
                middle_slice: Some(puzzle_size / 2 + 1),
                max_rank_without_middle: puzzle_size.saturating_sub(3) / 2,
                max_rank_with_middle: puzzle_size / 2,
            }
        } else {
            let max_rank = (puzzle_size / 2).saturating_sub(1);
            Self {
                puzzle_size,
                middle_slice: None,
                max_rank_without_middle: max_rank,
                max_rank_with_middle: max_rank,
            }
        }
    }

    /// Returns the number of layers along each axis.
    pub fn puzzle_size(&self) -> u16 {
        self.puzzle_size
    }

    /// Returns the 1-indexed middle layer, which exists only on odd cubes.
    pub fn middle_slice(&self) -> Option<u16> {
        self.middle_slice
    }

    /// Returns the rank of the middle layer, counting the outer layer as
    /// rank 0.
    pub fn middle_rank(&self) -> Option<u16> {
        self.middle_slice.map(|slice| slice - 1)
    }

    /// Returns the largest wing rank, which is also the largest first rank
    /// of a big center.
    pub fn max_rank_without_middle(&self) -> u16 {
        self.max_rank_without_middle
    }

    /// Returns the largest second rank of a big center, which includes the
    /// middle layer on odd cubes.
    pub fn max_rank_with_middle(&self) -> u16 {
        self.max_rank_with_middle
    }

    /// Classifies a 1-indexed layer, counted from some face.
    pub fn band(&self, layer: u16) -> Band {
        let n = self.puzzle_size;
        if Some(layer) == self.middle_slice {
            Band::Middle
        } else if layer == 1 {
            Band::First
        } else if layer == n {
            Band::Last
        } else if 2 * u32::from(layer) <= u32::from(n) {
            Band::BetweenFirstAndMiddle { depth: layer - 1 }
        } else {
            Band::BetweenMiddleAndLast { depth: n - layer }
        }
    }
}

/// Position of a layer relative to the face it is counted from.
///
/// `depth` is the distance from the nearer outer layer, so the outer layers
/// themselves would have depth 0.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Band {
    /// Layer containing the face.
    First,
    /// Central layer of an odd cube.
    Middle,
    /// Layer containing the opposite face.
    Last,
    /// Inner layer closer to the face.
    BetweenFirstAndMiddle { depth: u16 },
    /// Inner layer closer to the opposite face.
    BetweenMiddleAndLast { depth: u16 },
}

/// Returns the orbit kinds present on a cube with `puzzle_size` layers.
pub fn orbit_inventory(puzzle_size: u16) -> OrbitInventory {
    let mut ret = OrbitInventory::new();
    match puzzle_size {
        0 => (),
        1 => {
            ret.insert(OrbitKind::Center);
        }
        _ => {
            let geom = Geometry::new(puzzle_size);
            let wo = geom.max_rank_without_middle();
            let w = geom.max_rank_with_middle();

            ret.insert(OrbitKind::Corner);
            if geom.middle_slice().is_some() {
                ret.insert(OrbitKind::Midge);
                ret.insert(OrbitKind::Center);
            }
            ret.extend((1..=wo).map(|rank| OrbitKind::Wing { rank }));
            ret.extend(
                iproduct!(1..=wo, 1..=w).map(|(r1, r2)| OrbitKind::CenterBig { ranks: [r1, r2] }),
            );
        }
    }
    ret
}

/// Returns the face, row, and column of a slot on a cube with `n` layers.
///
/// Rows go down and columns go right, as seen when looking at the face with
/// the orientation given by its frame.
pub(crate) fn slot_grid_position(kind: OrbitKind, slot: usize, n: u16) -> (Face, u16, u16) {
    let per_face = kind.slots_per_face();
    let face = Face::ALL[slot / per_face % FACE_COUNT];
    let k = slot % per_face;
    let last = n.saturating_sub(1);
    let mid = last / 2;

    let (base, quarter_turns) = match kind {
        OrbitKind::Corner => ((0, 0), k),
        OrbitKind::Midge => ((0, mid), k),
        OrbitKind::Center => ((mid, mid), 0),
        OrbitKind::Wing { rank } if k % 2 == 0 => ((0, rank), k / 2),
        OrbitKind::Wing { rank } => ((0, last.saturating_sub(rank)), k / 2),
        OrbitKind::CenterBig { ranks: [r1, r2] } => ((r1, r2), k),
    };

    let (row, col) = (0..quarter_turns).fold(base, |(row, col), _| (col, last - row));
    (face, row, col)
}

/// Point in doubled integer coordinates, so that sticker centers on a cube
/// with `n` layers lie on the planes `±n` and every coordinate is an integer.
pub(crate) type Point = [i32; 3];

/// Outward normal, column direction, and row direction of a face.
struct Frame {
    normal: Point,
    right: Point,
    down: Point,
}

/// Frames in [`Face::ALL`] order. Every frame has `right × down == -normal`.
const FRAMES: [Frame; FACE_COUNT] = [
    // U
    Frame {
        normal: [0, 1, 0],
        right: [1, 0, 0],
        down: [0, 0, 1],
    },
    // F
    Frame {
        normal: [0, 0, 1],
        right: [1, 0, 0],
        down: [0, -1, 0],
    },
    // R
    Frame {
        normal: [1, 0, 0],
        right: [0, 0, -1],
        down: [0, -1, 0],
    },
    // D
    Frame {
        normal: [0, -1, 0],
        right: [1, 0, 0],
        down: [0, 0, -1],
    },
    // B
    Frame {
        normal: [0, 0, -1],
        right: [-1, 0, 0],
        down: [0, -1, 0],
    },
    // L
    Frame {
        normal: [-1, 0, 0],
        right: [0, 0, 1],
        down: [0, -1, 0],
    },
];

fn dot(a: Point, b: Point) -> i32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Point, b: Point) -> Point {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Returns the center of a sticker on a cube with `n` layers.
pub(crate) fn grid_to_point(face: Face, row: u16, col: u16, n: u16) -> Point {
    let frame = &FRAMES[face.index()];
    let n = i32::from(n);
    let u = 2 * i32::from(col) - (n - 1);
    let v = 2 * i32::from(row) - (n - 1);
    std::array::from_fn(|i| frame.normal[i] * n + frame.right[i] * u + frame.down[i] * v)
}

/// Rotates `p` a clockwise quarter turn around the axis of `face`, as seen
/// looking at the face from outside.
pub(crate) fn rotate_point(face: Face, p: Point) -> Point {
    let a = FRAMES[face.index()].normal;
    let along = dot(a, p);
    let perp = cross(a, p);
    std::array::from_fn(|i| a[i] * along - perp[i])
}

/// Returns the 0-indexed layer containing the sticker centered at `p`,
/// counted from `face` on a cube with `n` layers.
pub(crate) fn layer_depth(face: Face, p: Point, n: u16) -> u16 {
    let c = dot(FRAMES[face.index()].normal, p);
    let n_i = i32::from(n);
    if c == n_i {
        0
    } else if c == -n_i {
        n.saturating_sub(1)
    } else {
        u16::try_from((n_i - 1 - c) / 2).unwrap_or(0)
    }
}
