use smallvec::SmallVec;

use crate::{Orbit, OrbitKind, StateError};

/// Permutation cycle of slots within one orbit.
///
/// Applying the cycle moves the sticker in `indices[i]` to `indices[i + 1]`,
/// and the sticker in the last slot back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle {
    /// Orbit that the indices refer to.
    pub kind: OrbitKind,
    /// Slot indices within the orbit.
    pub indices: SmallVec<[u16; 4]>,
}

impl Cycle {
    /// Constructs a cycle.
    pub fn new(kind: OrbitKind, indices: impl IntoIterator<Item = u16>) -> Self {
        Self {
            kind,
            indices: indices.into_iter().collect(),
        }
    }

    /// Returns the number of slots in the cycle.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns whether the cycle has no slots.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Checks that `cycle` can be applied to `orbit` without mutating anything.
///
/// Returns `false` if applying the cycle has no effect, which is the case for
/// a cycle of length 1 or a cycle for a different orbit kind.
pub fn validate_on_orbit(cycle: &Cycle, orbit: Option<&Orbit>) -> Result<bool, StateError> {
    let kind = cycle.kind;
    if cycle.is_empty() {
        return Err(StateError::EmptyCycle { kind });
    }
    if cycle.len() == 1 {
        log::debug!("ignoring cycle of length 1 on {kind} orbit");
        return Ok(false);
    }

    let orbit = orbit.ok_or(StateError::MissingOrbit { kind })?;
    let len = orbit.slots().len();
    if len == 0 {
        return Err(StateError::EmptyOrbit { kind });
    }
    if orbit.kind() != kind {
        log::trace!("ignoring cycle for {kind} on {} orbit", orbit.kind());
        return Ok(false);
    }
    if let Some(&index) = cycle.indices.iter().find(|&&i| usize::from(i) >= len) {
        return Err(StateError::SlotOutOfRange { kind, index, len });
    }

    Ok(true)
}

/// Applies `cycle` to `orbit` in place.
///
/// A cycle of length 1 or a cycle for a different orbit kind has no effect.
/// If the cycle is invalid, `orbit` is left unchanged.
pub fn apply_on_orbit(cycle: &Cycle, orbit: Option<&mut Orbit>) -> Result<(), StateError> {
    if validate_on_orbit(cycle, orbit.as_deref())? {
        if let Some(orbit) = orbit {
            rotate_unchecked(cycle, orbit);
        }
    }
    Ok(())
}

/// Rotates slot contents along `cycle`. The cycle must already have passed
/// [`validate_on_orbit()`].
pub(crate) fn rotate_unchecked(cycle: &Cycle, orbit: &mut Orbit) {
    let slots = orbit.slots_mut();
    for i in (1..cycle.len()).rev() {
        slots.swap(
            usize::from(cycle.indices[i]),
            usize::from(cycle.indices[i - 1]),
        );
    }
}
