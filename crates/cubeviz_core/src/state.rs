use cubeviz_notation::{FACE_COUNT, Face, Move, parse_move};

use crate::cycle::rotate_unchecked;
use crate::geometry::slot_grid_position;
use crate::{
    CompiledMove, Error, Geometry, Orbit, OrbitInventory, OrbitKind, StateError, Sticker, Str,
    compile_move, orbit_inventory, validate_on_orbit,
};

/// Stickers of an NxNxN cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    geometry: Geometry,
    orbit_types: OrbitInventory,
    /// Orbits in the same order as `orbit_types`.
    orbits: Vec<Orbit>,
}

impl PuzzleState {
    /// Constructs a solved cube with `puzzle_size` layers.
    ///
    /// `color_scheme` gives the color of each face in
    /// [`Face::ALL`](cubeviz_notation::Face::ALL) order.
    pub fn new<S: Into<Str>>(
        puzzle_size: u16,
        color_scheme: impl IntoIterator<Item = S>,
    ) -> Result<Self, StateError> {
        if puzzle_size == 0 {
            return Err(StateError::ZeroPuzzleSize);
        }
        let color_scheme: Vec<Str> = color_scheme.into_iter().map(Into::into).collect();
        if color_scheme.len() != FACE_COUNT {
            return Err(StateError::ColorSchemeLength {
                len: color_scheme.len(),
            });
        }

        let orbit_types = orbit_inventory(puzzle_size);
        let orbits = orbit_types
            .iter()
            .map(|&kind| Orbit::solved(kind, &color_scheme))
            .collect();

        Ok(Self {
            geometry: Geometry::new(puzzle_size),
            orbit_types,
            orbits,
        })
    }

    /// Returns the number of layers along each axis.
    pub fn puzzle_size(&self) -> u16 {
        self.geometry.puzzle_size()
    }
    /// Returns the layer structure of the cube.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
    /// Returns the orbit kinds present on the cube.
    pub fn orbit_types(&self) -> &OrbitInventory {
        &self.orbit_types
    }
    /// Returns all orbits, in canonical order.
    pub fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }
    /// Returns the orbit of the given kind, if the cube has one.
    pub fn orbit(&self, kind: OrbitKind) -> Option<&Orbit> {
        let i = self.orbits.binary_search_by_key(&kind, |o| o.kind()).ok()?;
        self.orbits.get(i)
    }
    fn orbit_mut(&mut self, kind: OrbitKind) -> Option<&mut Orbit> {
        let i = self.orbits.binary_search_by_key(&kind, |o| o.kind()).ok()?;
        self.orbits.get_mut(i)
    }

    /// Compiles a move for this cube without applying it.
    pub fn compile(&self, mv: &Move) -> Result<CompiledMove, StateError> {
        Ok(CompiledMove {
            mv: *mv,
            cycles: compile_move(mv, &self.geometry, &self.orbit_types)?,
        })
    }

    /// Applies the cycles of a compiled move.
    ///
    /// Every cycle is checked before any is applied, so if one of them is
    /// invalid the state is left unchanged.
    pub fn apply_compiled(&mut self, compiled: &CompiledMove) -> Result<(), StateError> {
        let mut effective = Vec::with_capacity(compiled.cycles.len());
        for cycle in &compiled.cycles {
            if validate_on_orbit(cycle, self.orbit(cycle.kind))? {
                effective.push(cycle);
            }
        }
        for cycle in effective {
            if let Some(orbit) = self.orbit_mut(cycle.kind) {
                rotate_unchecked(cycle, orbit);
            }
        }
        Ok(())
    }

    /// Applies a single move.
    ///
    /// If the move cannot be compiled, the state is left unchanged.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), StateError> {
        let compiled = self.compile(mv)?;
        self.apply_compiled(&compiled)
    }

    /// Applies a sequence of moves in order, stopping at the first one that
    /// fails. Moves before it remain applied.
    pub fn apply_sequence<'a>(
        &mut self,
        moves: impl IntoIterator<Item = &'a Move>,
    ) -> Result<(), StateError> {
        moves.into_iter().try_for_each(|mv| self.apply_move(mv))
    }

    /// Parses and applies whitespace-separated notation, one token at a
    /// time. Tokens before an invalid one remain applied.
    pub fn apply_notation(&mut self, notation: &str) -> Result<(), Error> {
        for token in notation.split_whitespace() {
            let mv = parse_move(token, self.puzzle_size())?;
            self.apply_move(&mv)?;
        }
        Ok(())
    }

    /// Returns the stickers on `face` as a grid in row-major order, with
    /// [`PuzzleState::puzzle_size()`] stickers per row.
    pub fn face_stickers(&self, face: Face) -> Vec<&Sticker> {
        let n = self.puzzle_size();
        let mut grid: Vec<Option<&Sticker>> = vec![None; usize::from(n) * usize::from(n)];
        for orbit in &self.orbits {
            let per_face = orbit.kind().slots_per_face();
            let start = face.index() * per_face;
            for (slot, contents) in orbit.slots().iter().enumerate().skip(start).take(per_face) {
                let (_, row, col) = slot_grid_position(orbit.kind(), slot, n);
                grid[usize::from(row) * usize::from(n) + usize::from(col)] =
                    Some(contents.content());
            }
        }
        grid.into_iter().flatten().collect()
    }

    /// Returns whether every face shows a single color.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let stickers = self.face_stickers(face);
            stickers.iter().all(|s| s.color() == stickers[0].color())
        })
    }
}
