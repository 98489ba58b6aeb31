use crate::{NotationError, OrbitKind};

/// Error produced when building or mutating a puzzle state.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("cycle for {kind} is empty")]
    EmptyCycle { kind: OrbitKind },
    #[error("puzzle has no {kind} orbit")]
    MissingOrbit { kind: OrbitKind },
    #[error("{kind} orbit has no slots")]
    EmptyOrbit { kind: OrbitKind },
    #[error("slot {index} is out of range for {kind} orbit with {len} slots")]
    SlotOutOfRange {
        kind: OrbitKind,
        index: u16,
        len: usize,
    },
    #[error("layers {begin}..={end} are out of range for a puzzle with {puzzle_size} layers")]
    SliceOutOfRange {
        begin: u16,
        end: u16,
        puzzle_size: u16,
    },
    #[error("puzzle size must be positive")]
    ZeroPuzzleSize,
    #[error("color scheme must have 6 colors, not {len}")]
    ColorSchemeLength { len: usize },
}

/// Error produced when applying notation to a puzzle state.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    State(#[from] StateError),
}
