use cubeviz_notation::Move;

use crate::tables::{self, TableKind};
use crate::{Band, Cycle, Geometry, OrbitInventory, OrbitKind, StateError};

/// Move together with the cycles it compiles to on a particular cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMove {
    /// Move descriptor.
    pub mv: Move,
    /// Cycles in application order.
    pub cycles: Vec<Cycle>,
}

/// Expands a move into the slot cycles it causes on each orbit in
/// `inventory`.
///
/// Cycles are ordered by layer and then by orbit. Orbit kinds missing from
/// `inventory` are skipped.
pub fn compile_move(
    mv: &Move,
    geometry: &Geometry,
    inventory: &OrbitInventory,
) -> Result<Vec<Cycle>, StateError> {
    let puzzle_size = geometry.puzzle_size();
    if mv.slice_begin < 1 || mv.slice_begin > mv.slice_end || mv.slice_end > puzzle_size {
        return Err(StateError::SliceOutOfRange {
            begin: mv.slice_begin,
            end: mv.slice_end,
            puzzle_size,
        });
    }

    let mut ret = vec![];
    if mv.is_identity() {
        return Ok(ret);
    }

    for layer in mv.slice_begin..=mv.slice_end {
        let band = geometry.band(layer);
        let (face, turn_count) = match band {
            Band::First | Band::Middle | Band::BetweenFirstAndMiddle { .. } => {
                (mv.face, mv.turn_count)
            }
            Band::Last | Band::BetweenMiddleAndLast { .. } => {
                (mv.face.opposite(), (4 - mv.turn_count % 4) % 4)
            }
        };

        for &kind in inventory {
            if let Some(table) = table_for(band, kind, geometry.middle_rank()) {
                ret.extend(
                    tables::cycles(table, face, turn_count)
                        .iter()
                        .map(|indices| Cycle::new(kind, indices.iter().copied())),
                );
            }
        }
    }

    log::trace!("compiled {mv:?} into {} cycles", ret.len());
    Ok(ret)
}

/// Returns the table for turning a layer in `band` through an orbit of
/// `kind`, or `None` if the layer does not move any of its stickers.
fn table_for(band: Band, kind: OrbitKind, middle_rank: Option<u16>) -> Option<TableKind> {
    match band {
        Band::First | Band::Last => match kind {
            OrbitKind::Corner => Some(TableKind::CornerOuter),
            OrbitKind::Midge => Some(TableKind::MidgeOuter),
            OrbitKind::Center => None,
            OrbitKind::Wing { .. } => Some(TableKind::WingOuter),
            OrbitKind::CenterBig { .. } => Some(TableKind::CenterBigOuter),
        },

        Band::Middle => match kind {
            OrbitKind::Midge => Some(TableKind::MidgeMiddle),
            OrbitKind::Center => Some(TableKind::CenterMiddle),
            OrbitKind::CenterBig { ranks: [_, r2] } if Some(r2) == middle_rank => {
                Some(TableKind::CenterBigMiddle)
            }
            _ => None,
        },

        Band::BetweenFirstAndMiddle { depth } | Band::BetweenMiddleAndLast { depth } => {
            match kind {
                OrbitKind::Wing { rank } if rank == depth => Some(TableKind::WingInner),
                OrbitKind::CenterBig { ranks: [r1, r2] } if r1 == depth && r2 == depth => {
                    Some(TableKind::CenterBigXCenter)
                }
                OrbitKind::CenterBig { ranks: [r1, _] } if r1 == depth => {
                    Some(TableKind::CenterBigDirect)
                }
                OrbitKind::CenterBig { ranks: [_, r2] } if r2 == depth => {
                    Some(TableKind::CenterBigIndirect)
                }
                _ => None,
            }
        }
    }
}
