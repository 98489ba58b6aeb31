//! Move notation parser for NxNxN cubes.
//!
//! A move token such as `R`, `Rw'`, `3-4Fw2`, or `M` is parsed into a [`Move`]
//! descriptor, which names a face, a contiguous range of layers counted from
//! that face, and a number of clockwise quarter turns.
//!
//! Layers are numbered starting from 1, the layer containing the face itself.
//! On an NxNxN cube, layer N contains the opposite face.
//!
//! # Example
//!
//! ```rust
//! use cubeviz_notation::{Face, parse_move};
//!
//! let mv = parse_move("3-4Fw2", 7).unwrap();
//! assert_eq!(mv.face, Face::F);
//! assert_eq!((mv.slice_begin, mv.slice_end), (3, 4));
//! assert_eq!(mv.turn_count, 2);
//! ```

mod error;
mod face;
mod moves;
mod parse;

pub use error::NotationError;
pub use face::{FACE_COUNT, Face};
pub use moves::{Move, MoveSequence};
pub use parse::{parse_move, parse_sequence};
