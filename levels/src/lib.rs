#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Level definitions, hazard motion and the authored level catalog.

mod catalog;
mod motion;

pub use catalog::{Catalog, LevelFactory};
pub use motion::HazardMotion;

use hazard_dash_core::{CellCoord, GridSize, LevelNumber};
use serde::{Deserialize, Serialize};

/// Single level: a target cell, a hazard set and an optional motion rule.
///
/// Levels are built by catalog factories and owned by the session that plays
/// them; updating hazards never touches the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    number: LevelNumber,
    target: CellCoord,
    hazards: Vec<CellCoord>,
    motion: Option<HazardMotion>,
}

impl Level {
    /// Creates a level from its authored data.
    ///
    /// The target is expected not to coincide with any initial hazard; this is
    /// the author's responsibility and is not checked here.
    #[must_use]
    pub fn new(
        number: LevelNumber,
        target: CellCoord,
        hazards: Vec<CellCoord>,
        motion: Option<HazardMotion>,
    ) -> Self {
        Self {
            number,
            target,
            hazards,
            motion,
        }
    }

    /// Position of the level within the catalog.
    #[must_use]
    pub const fn number(&self) -> LevelNumber {
        self.number
    }

    /// Cell the player must reach to complete the level.
    #[must_use]
    pub const fn target(&self) -> CellCoord {
        self.target
    }

    /// Current hazard positions in authored order.
    #[must_use]
    pub fn hazards(&self) -> &[CellCoord] {
        &self.hazards
    }

    /// Motion rule driving the hazards, if any.
    #[must_use]
    pub fn motion(&self) -> Option<&HazardMotion> {
        self.motion.as_ref()
    }

    /// Reports whether a hazard currently occupies the cell.
    #[must_use]
    pub fn is_hazard(&self, cell: CellCoord) -> bool {
        self.hazards.contains(&cell)
    }

    /// Advances the level by one tick.
    ///
    /// Returns `true` when the hazards were translated. Static levels never
    /// change, however often they are updated.
    pub fn update(&mut self, grid: GridSize) -> bool {
        let Some(motion) = self.motion.as_mut() else {
            return false;
        };

        match motion.advance(&self.hazards, grid) {
            Some(moved) => {
                self.hazards = moved;
                true
            }
            None => false,
        }
    }
}

/// Builds a lattice of hazards covering the grid.
///
/// Hazards are laid out column by column starting at the provided origin and
/// repeating every `column_spacing` columns and `row_spacing` rows until the
/// grid edge. A spacing of zero is treated as one.
#[must_use]
pub fn hazard_grid(
    column_start: u32,
    row_start: u32,
    column_spacing: u32,
    row_spacing: u32,
    grid: GridSize,
) -> Vec<CellCoord> {
    let column_step = usize::try_from(column_spacing.max(1)).unwrap_or(1);
    let row_step = usize::try_from(row_spacing.max(1)).unwrap_or(1);

    let mut hazards = Vec::new();
    for column in (column_start..grid.columns()).step_by(column_step) {
        for row in (row_start..grid.rows()).step_by(row_step) {
            hazards.push(CellCoord::new(column, row));
        }
    }
    hazards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazard_grid_covers_lattice_points() {
        let hazards = hazard_grid(0, 0, 3, 3, GridSize::new(7, 4));

        assert_eq!(
            hazards,
            vec![
                CellCoord::new(0, 0),
                CellCoord::new(0, 3),
                CellCoord::new(3, 0),
                CellCoord::new(3, 3),
                CellCoord::new(6, 0),
                CellCoord::new(6, 3),
            ]
        );
    }

    #[test]
    fn hazard_grid_is_empty_when_origin_outside_grid() {
        assert!(hazard_grid(10, 0, 2, 2, GridSize::new(10, 10)).is_empty());
    }

    #[test]
    fn hazard_grid_treats_zero_spacing_as_one() {
        let hazards = hazard_grid(0, 0, 0, 0, GridSize::new(2, 2));

        assert_eq!(hazards.len(), 4);
    }

    #[test]
    fn static_level_update_is_idempotent() {
        let mut level = Level::new(
            LevelNumber::new(0),
            CellCoord::new(9, 9),
            vec![CellCoord::new(1, 1), CellCoord::new(2, 2)],
            None,
        );
        let before = level.clone();

        for _ in 0..1_000 {
            assert!(!level.update(GridSize::STANDARD));
        }

        assert_eq!(level, before);
    }

    #[test]
    fn moving_level_translates_hazards_on_cadence() {
        let grid = GridSize::new(10, 10);
        let mut level = Level::new(
            LevelNumber::new(2),
            CellCoord::new(5, 5),
            vec![CellCoord::new(9, 0)],
            Some(HazardMotion::new(1, 0, 2)),
        );

        assert!(!level.update(grid));
        assert!(!level.update(grid));
        assert_eq!(level.hazards(), &[CellCoord::new(9, 0)]);
        assert!(level.update(grid));
        assert_eq!(level.hazards(), &[CellCoord::new(0, 0)]);
        assert!(level.is_hazard(CellCoord::new(0, 0)));
        assert!(!level.is_hazard(CellCoord::new(9, 0)));
    }
}
