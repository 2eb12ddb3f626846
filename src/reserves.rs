//! Consumable reserve accounting
//!
//! Water and foam levels tracked as percentages of a fixed capacity.
//! Draining clamps at empty; a drain is refused only when the reserve is
//! already empty before the call, so partial availability still serves a
//! fire request.

use core::fmt;

use crate::error::ReserveError;

/// Consumable kinds tracked by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveKind {
    Water,
    Foam,
}

impl fmt::Display for ReserveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Water => write!(f, "Water"),
            Self::Foam => write!(f, "Foam"),
        }
    }
}

/// One consumable reserve.
#[derive(Debug, Clone, Copy)]
pub struct Reserve {
    capacity_liters: u32,
    percent_remaining: f32,
}

impl Reserve {
    /// A reserve at full capacity.
    pub fn full(capacity_liters: u32) -> Self {
        Self {
            capacity_liters,
            percent_remaining: 100.0,
        }
    }

    pub fn percent_remaining(&self) -> f32 {
        self.percent_remaining
    }

    pub fn capacity_liters(&self) -> u32 {
        self.capacity_liters
    }

    /// Liters left, derived from the percentage.
    pub fn liters_remaining(&self) -> f32 {
        self.capacity_liters as f32 * self.percent_remaining / 100.0
    }

    pub fn is_exhausted(&self) -> bool {
        self.percent_remaining <= 0.0
    }

    fn drain(&mut self, liters: u32) -> f32 {
        let drop = liters as f32 / self.capacity_liters as f32 * 100.0;
        self.percent_remaining = (self.percent_remaining - drop).max(0.0);
        self.percent_remaining
    }
}

/// Both panel reserves behind a single drain/query surface.
#[derive(Debug, Clone)]
pub struct ReserveTracker {
    water: Reserve,
    foam: Reserve,
}

impl ReserveTracker {
    pub fn new(water_capacity_liters: u32, foam_capacity_liters: u32) -> Self {
        Self {
            water: Reserve::full(water_capacity_liters),
            foam: Reserve::full(foam_capacity_liters),
        }
    }

    pub fn reserve(&self, kind: ReserveKind) -> &Reserve {
        match kind {
            ReserveKind::Water => &self.water,
            ReserveKind::Foam => &self.foam,
        }
    }

    fn reserve_mut(&mut self, kind: ReserveKind) -> &mut Reserve {
        match kind {
            ReserveKind::Water => &mut self.water,
            ReserveKind::Foam => &mut self.foam,
        }
    }

    pub fn level_of(&self, kind: ReserveKind) -> f32 {
        self.reserve(kind).percent_remaining()
    }

    pub fn is_exhausted(&self, kind: ReserveKind) -> bool {
        self.reserve(kind).is_exhausted()
    }

    /// Drain `liters` from one reserve and return the new percentage.
    ///
    /// Refused only when the reserve is already empty before the call; a
    /// drain that would cross below empty clamps to exactly 0 and succeeds.
    pub fn drain(&mut self, kind: ReserveKind, liters: u32) -> Result<f32, ReserveError> {
        let reserve = self.reserve_mut(kind);
        if reserve.is_exhausted() {
            return Err(ReserveError::Exhausted(kind));
        }
        Ok(reserve.drain(liters))
    }
}
