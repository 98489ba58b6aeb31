use std::fmt;

use cubeviz_notation::FACE_COUNT;

use crate::Str;

/// Structural type of a set of sticker slots that can be permuted among each
/// other.
///
/// Ranks count from the edge of a face, starting at 1 for the layer just
/// inside the outermost one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrbitKind {
    /// Corner stickers.
    Corner,
    /// Stickers in the middle of each edge, present only on odd cubes.
    Midge,
    /// Sticker in the exact center of each face, present only on odd cubes.
    Center,
    /// Edge stickers `rank` layers away from the nearest corner.
    Wing {
        #[allow(missing_docs)]
        rank: u16,
    },
    /// Non-central face stickers, `ranks[0]` layers down from the top edge
    /// and `ranks[1]` layers in from the left edge of the first slot.
    ///
    /// Equal ranks give X-centers. A rank equal to the middle layer gives
    /// T-centers. `[a, b]` and `[b, a]` are mirror images and form separate
    /// orbits.
    CenterBig {
        #[allow(missing_docs)]
        ranks: [u16; 2],
    },
}

impl OrbitKind {
    /// Returns the number of slots of this kind on each face.
    pub fn slots_per_face(self) -> usize {
        match self {
            OrbitKind::Corner => 4,
            OrbitKind::Midge => 4,
            OrbitKind::Center => 1,
            OrbitKind::Wing { .. } => 8,
            OrbitKind::CenterBig { .. } => 4,
        }
    }

    /// Returns the total number of slots in an orbit of this kind.
    pub fn slot_count(self) -> usize {
        self.slots_per_face() * FACE_COUNT
    }
}

impl fmt::Display for OrbitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitKind::Corner => write!(f, "corner"),
            OrbitKind::Midge => write!(f, "midge"),
            OrbitKind::Center => write!(f, "center"),
            OrbitKind::Wing { rank } => write!(f, "wing {rank}"),
            OrbitKind::CenterBig { ranks: [r1, r2] } => write!(f, "center {r1},{r2}"),
        }
    }
}

/// Colored sticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sticker {
    color: Str,
}

impl Sticker {
    /// Constructs a sticker with the given color.
    pub fn new(color: impl Into<Str>) -> Self {
        Self {
            color: color.into(),
        }
    }

    /// Returns the sticker's color.
    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Position on the cube that holds exactly one sticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    content: Sticker,
}

impl Slot {
    pub(crate) fn new(content: Sticker) -> Self {
        Self { content }
    }

    /// Returns the sticker currently in the slot.
    pub fn content(&self) -> &Sticker {
        &self.content
    }
}

/// All slots of one [`OrbitKind`].
///
/// Slots are ordered by face in [`cubeviz_notation::Face::ALL`] order, then
/// clockwise around the face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orbit {
    kind: OrbitKind,
    slots: Vec<Slot>,
}

impl Orbit {
    /// Constructs an orbit in which every slot on a face has that face's
    /// color.
    pub(crate) fn solved(kind: OrbitKind, color_scheme: &[Str]) -> Self {
        let per_face = kind.slots_per_face();
        let slots = (0..kind.slot_count())
            .map(|i| Slot::new(Sticker::new(color_scheme[i / per_face].clone())))
            .collect();
        Self { kind, slots }
    }

    #[cfg(test)]
    pub(crate) fn from_slots(kind: OrbitKind, slots: Vec<Slot>) -> Self {
        Self { kind, slots }
    }

    /// Returns the orbit kind.
    pub fn kind(&self) -> OrbitKind {
        self.kind
    }

    /// Returns the slots of the orbit.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Slot] {
        &mut self.slots
    }
}
