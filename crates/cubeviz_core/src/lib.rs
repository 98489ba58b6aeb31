//! Sticker permutation engine for NxNxN cubes.
//!
//! A [`PuzzleState`] holds every sticker of the cube, grouped into
//! [`Orbit`]s of structurally equivalent slots. Moves parsed by
//! [`cubeviz_notation`] are compiled into [`Cycle`]s of slot indices and
//! applied in place.
//!
//! # Example
//!
//! ```rust
//! use cubeviz_core::PuzzleState;
//!
//! let scheme = ["white", "green", "red", "yellow", "blue", "orange"];
//! let mut state = PuzzleState::new(3, scheme).unwrap();
//! state.apply_notation("R U R' U'").unwrap();
//! assert!(!state.is_solved());
//! for _ in 0..5 {
//!     state.apply_notation("R U R' U'").unwrap();
//! }
//! assert!(state.is_solved());
//! ```

#[macro_use]
extern crate lazy_static;

mod compile;
mod cycle;
mod error;
mod geometry;
mod orbit;
mod state;
mod tables;

pub use compile::{CompiledMove, compile_move};
pub use cubeviz_notation::{Face, Move, MoveSequence, NotationError};
pub use cycle::{Cycle, apply_on_orbit, validate_on_orbit};
pub use error::{Error, StateError};
pub use geometry::{Band, Geometry, OrbitInventory, orbit_inventory};
pub use orbit::{Orbit, OrbitKind, Slot, Sticker};
pub use state::PuzzleState;

/// Cheaply clonable immutable string.
pub type Str = lean_string::LeanString;

#[cfg(test)]
mod tests;
