//! Hazard motion engine that drifts hazards across the grid on a fixed cadence.

use hazard_dash_core::{CellCoord, GridSize};
use serde::{Deserialize, Serialize};

/// Throttled translation applied to every hazard of a level.
///
/// The counter is owned by the value, so each level instance carries its own
/// motion phase and cloning a level clones that phase with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HazardMotion {
    dx: i32,
    dy: i32,
    ticks_per_move: u32,
    counter: u32,
}

impl HazardMotion {
    /// Creates a motion rule translating hazards by `(dx, dy)` after every
    /// `ticks_per_move` idle ticks.
    ///
    /// Hazards hold still for `ticks_per_move` ticks and move on the next one,
    /// so a cadence of zero moves them on every tick.
    #[must_use]
    pub const fn new(dx: i32, dy: i32, ticks_per_move: u32) -> Self {
        Self {
            dx,
            dy,
            ticks_per_move,
            counter: 0,
        }
    }

    /// Column offset applied on every move.
    #[must_use]
    pub const fn dx(&self) -> i32 {
        self.dx
    }

    /// Row offset applied on every move.
    #[must_use]
    pub const fn dy(&self) -> i32 {
        self.dy
    }

    /// Idle ticks between two consecutive moves.
    #[must_use]
    pub const fn ticks_per_move(&self) -> u32 {
        self.ticks_per_move
    }

    /// Ticks accumulated since the last move.
    #[must_use]
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    /// Advances the motion by one tick.
    ///
    /// Once the counter has reached the cadence, returns the translated hazard
    /// set and resets the counter. Otherwise bumps the counter and returns
    /// `None`, leaving the caller's hazards untouched.
    pub fn advance(&mut self, hazards: &[CellCoord], grid: GridSize) -> Option<Vec<CellCoord>> {
        if self.counter < self.ticks_per_move {
            self.counter = self.counter.saturating_add(1);
            return None;
        }

        self.counter = 0;
        Some(
            hazards
                .iter()
                .map(|hazard| hazard.wrapping_offset(self.dx, self.dy, grid))
                .collect(),
        )
    }
}
