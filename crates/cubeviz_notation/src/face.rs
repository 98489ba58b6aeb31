/// Number of faces on a cube.
pub const FACE_COUNT: usize = 6;

/// Face of a cube.
///
/// The declaration order is also the order of colors in a color scheme, and
/// each face is opposite the face three places after it.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Face {
    /// Up
    U,
    /// Front
    F,
    /// Right
    R,
    /// Down
    D,
    /// Back
    B,
    /// Left
    L,
}

impl Face {
    /// All faces, in color scheme order.
    pub const ALL: [Face; FACE_COUNT] = [Face::U, Face::F, Face::R, Face::D, Face::B, Face::L];

    /// Returns the position of the face in [`Face::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % FACE_COUNT]
    }

    /// Returns the face with the given letter, ignoring case.
    pub fn from_letter(c: char) -> Option<Self> {
        c.encode_utf8(&mut [0; 4]).parse().ok()
    }
}
