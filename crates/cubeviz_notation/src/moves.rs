use crate::Face;

/// Move on an NxNxN cube: a clockwise rotation of a contiguous range of
/// layers, as seen looking at `face`.
///
/// Layers are 1-indexed from `face`, so `slice_begin == 1` means the range
/// includes the face itself. Whole-puzzle rotations span every layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face that the layers are counted from and that the rotation is
    /// clockwise relative to.
    pub face: Face,
    /// Shallowest layer, inclusive.
    pub slice_begin: u16,
    /// Deepest layer, inclusive. This is always at least `slice_begin`.
    pub slice_end: u16,
    /// Number of clockwise quarter turns, from 0 to 3.
    pub turn_count: u8,
}

/// Ordered list of moves, applied left to right.
pub type MoveSequence = Vec<Move>;

impl Move {
    /// Constructs a move, normalizing the turn count into the range `0..4`
    /// and putting the slice bounds in order.
    pub fn new(face: Face, slices: [u16; 2], turns: i64) -> Self {
        let [a, b] = slices;
        Self {
            face,
            slice_begin: a.min(b),
            slice_end: a.max(b),
            turn_count: normalize_turn_count(turns),
        }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            turn_count: normalize_turn_count(-i64::from(self.turn_count)),
            ..self
        }
    }

    /// Returns whether the move has no effect.
    pub fn is_identity(self) -> bool {
        self.turn_count == 0
    }

    /// Returns the number of layers turned by the move.
    pub fn layer_count(self) -> u16 {
        self.slice_end - self.slice_begin + 1
    }

    /// Returns the same move expressed from the opposite face of an
    /// `puzzle_size`-layer cube: layer `i` becomes layer `puzzle_size + 1 - i`
    /// and the direction of rotation is reversed.
    #[must_use]
    pub fn mirrored(self, puzzle_size: u16) -> Self {
        let reflect = |layer: u16| puzzle_size.saturating_sub(layer).saturating_add(1);
        Self {
            face: self.face.opposite(),
            slice_begin: reflect(self.slice_end),
            slice_end: reflect(self.slice_begin),
            turn_count: normalize_turn_count(-i64::from(self.turn_count)),
        }
    }

    /// Mirrors the move if its layers lie mostly past the middle of the cube,
    /// so that the range always starts as close to `face` as possible.
    ///
    /// A range that is exactly centered is left alone.
    #[must_use]
    pub fn normalized(self, puzzle_size: u16) -> Self {
        if u32::from(self.slice_begin) + u32::from(self.slice_end) > u32::from(puzzle_size) + 1 {
            let ret = self.mirrored(puzzle_size);
            log::debug!("mirrored {self:?} to {ret:?}");
            ret
        } else {
            self
        }
    }
}

fn normalize_turn_count(turns: i64) -> u8 {
    turns.rem_euclid(4) as u8
}
