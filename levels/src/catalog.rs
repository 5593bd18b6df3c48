//! Hand-authored level catalog.

use hazard_dash_core::{CellCoord, GridSize, LevelNumber};

use crate::{hazard_grid, HazardMotion, Level};

/// Pure constructor producing a fresh level for the provided catalog slot.
pub type LevelFactory = fn(LevelNumber) -> Level;

const STANDARD_LEVELS: [LevelFactory; 4] = [
    open_field,
    static_lattice,
    drifting_lattice,
    crosswind,
];

/// Ordered list of level factories addressed by zero-based index.
#[derive(Clone, Debug)]
pub struct Catalog {
    factories: Vec<LevelFactory>,
}

impl Catalog {
    /// Creates a catalog from the provided factories, in play order.
    #[must_use]
    pub fn new(factories: Vec<LevelFactory>) -> Self {
        Self { factories }
    }

    /// Catalog shipped with the game.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_LEVELS.to_vec())
    }

    /// Builds the level stored at `index`.
    ///
    /// Returns `None` past the last authored level, which callers treat as
    /// "every level cleared". Each call constructs an independent level, so
    /// motion phase never carries over between visits.
    #[must_use]
    pub fn get_level(&self, index: LevelNumber) -> Option<Level> {
        self.factories
            .get(index.get())
            .map(|factory| factory(index))
    }

    /// Number of levels in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Reports whether the catalog holds no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn open_field(number: LevelNumber) -> Level {
    Level::new(number, CellCoord::new(50, 25), Vec::new(), None)
}

fn static_lattice(number: LevelNumber) -> Level {
    Level::new(
        number,
        CellCoord::new(20, 20),
        hazard_grid(0, 0, 3, 3, GridSize::STANDARD),
        None,
    )
}

fn drifting_lattice(number: LevelNumber) -> Level {
    Level::new(
        number,
        CellCoord::new(90, 1),
        hazard_grid(0, 0, 5, 6, GridSize::STANDARD),
        Some(HazardMotion::new(1, 1, 30)),
    )
}

fn crosswind(number: LevelNumber) -> Level {
    Level::new(
        number,
        CellCoord::new(10, 28),
        hazard_grid(2, 1, 7, 4, GridSize::STANDARD),
        Some(HazardMotion::new(-1, 0, 12)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_numbers_levels_by_position() {
        let catalog = Catalog::standard();

        for index in 0..catalog.len() {
            let level = catalog
                .get_level(LevelNumber::new(index))
                .expect("level inside catalog");
            assert_eq!(level.number(), LevelNumber::new(index));
        }
    }

    #[test]
    fn lookup_past_last_level_reports_absence() {
        let catalog = Catalog::standard();

        assert!(catalog.get_level(LevelNumber::new(catalog.len())).is_none());
    }

    #[test]
    fn empty_catalog_has_no_levels() {
        let catalog = Catalog::new(Vec::new());

        assert!(catalog.is_empty());
        assert!(catalog.get_level(LevelNumber::new(0)).is_none());
    }
}
