#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Hazard Dash engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing player intents or expired timers, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! for systems to react to deterministically. Systems consume event streams
//! and respond exclusively with new requests; they never touch session state.

use serde::{Deserialize, Serialize};

/// Canonical banner shown in the header of every frame.
pub const WELCOME_BANNER: &str = "Hazard Dash";

/// Cell the player occupies when a session starts.
pub const START_CELL: CellCoord = CellCoord::new(5, 5);

/// Dimensions of the playing field measured in whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    columns: u32,
    rows: u32,
}

impl GridSize {
    /// Field used by every shipped level.
    pub const STANDARD: Self = Self::new(100, 30);

    /// Creates a new grid size descriptor.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Reports whether the cell lies inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column < self.columns && cell.row < self.rows
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Translates the cell by the provided offsets with toroidal wraparound.
    ///
    /// Cells leaving one edge of the grid re-enter from the opposite edge, in
    /// both directions. A degenerate grid with a zero-length axis leaves that
    /// axis untouched.
    #[must_use]
    pub fn wrapping_offset(self, dx: i32, dy: i32, grid: GridSize) -> Self {
        Self {
            column: wrap_axis(self.column, dx, grid.columns()),
            row: wrap_axis(self.row, dy, grid.rows()),
        }
    }

    /// Moves the cell one step in the provided direction, clamped to the grid.
    ///
    /// Stepping against an edge is a no-op and returns the same cell.
    #[must_use]
    pub fn stepped(self, direction: Direction, grid: GridSize) -> Self {
        let last_column = grid.columns().saturating_sub(1);
        let last_row = grid.rows().saturating_sub(1);
        match direction {
            Direction::Up => Self::new(self.column, self.row.saturating_sub(1)),
            Direction::Down => {
                Self::new(self.column, self.row.saturating_add(1).min(last_row))
            }
            Direction::Left => Self::new(self.column.saturating_sub(1), self.row),
            Direction::Right => {
                Self::new(self.column.saturating_add(1).min(last_column), self.row)
            }
        }
    }
}

fn wrap_axis(value: u32, offset: i32, length: u32) -> u32 {
    if length == 0 {
        return value;
    }
    let wrapped = (i64::from(value) + i64::from(offset)).rem_euclid(i64::from(length));
    u32::try_from(wrapped).unwrap_or(value)
}

/// Cardinal movement directions available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

/// Identifier assigned to a single playthrough, from start to restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(u32);

impl SessionId {
    /// Creates a new session identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Identifier assigned to the session that replaces this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Zero-based ordinal of a level within the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelNumber(usize);

impl LevelNumber {
    /// Creates a new level number.
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Retrieves the zero-based index of the level.
    #[must_use]
    pub const fn get(&self) -> usize {
        self.0
    }

    /// Number of the level that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Lifecycle phase of the active session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Ticks advance the player and hazards.
    Playing,
    /// The player reached the target; the next level is pending.
    LevelComplete,
    /// Every level in the catalog was cleared.
    LevelWon,
    /// The player collided with a hazard.
    Lost,
}

impl Phase {
    /// Reports whether the phase only exits through a restart.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::LevelWon | Self::Lost)
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Buffers a directional intent, replacing any move not yet applied.
    Move {
        /// Direction the player wants to step on the next tick.
        direction: Direction,
    },
    /// Advances the session by one tick.
    Tick {
        /// Session that armed the timer producing this tick.
        session: SessionId,
    },
    /// Moves a completed level on to the next catalog entry.
    AdvanceLevel {
        /// Session that armed the level-transition timer.
        session: SessionId,
    },
    /// Replaces a finished session with a fresh one at level zero.
    Restart,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Announces that a session began at the provided level.
    SessionStarted {
        /// Identifier of the new session.
        session: SessionId,
        /// Level the session starts on.
        level: LevelNumber,
    },
    /// Confirms that the player stepped between two cells.
    PlayerMoved {
        /// Cell the player occupied before the tick.
        from: CellCoord,
        /// Cell the player occupies after the tick.
        to: CellCoord,
    },
    /// Reports that the active level's hazards were translated.
    HazardsAdvanced {
        /// Level whose hazards moved.
        level: LevelNumber,
    },
    /// Indicates that a tick finished with the session still in play.
    TickCompleted {
        /// Session that processed the tick.
        session: SessionId,
    },
    /// Announces that the player reached the target of the active level.
    LevelCompleted {
        /// Session that completed the level.
        session: SessionId,
        /// Level that was completed.
        level: LevelNumber,
    },
    /// Announces that play resumed on the next level.
    LevelStarted {
        /// Session that advanced.
        session: SessionId,
        /// Level that became active.
        level: LevelNumber,
    },
    /// Reports that the player collided with a hazard.
    GameLost {
        /// Session that ended.
        session: SessionId,
        /// Cell where the collision happened.
        cell: CellCoord,
    },
    /// Reports that the last level of the catalog was cleared.
    GameWon {
        /// Session that ended.
        session: SessionId,
    },
    /// Reports that a timer command was ignored because it no longer applies.
    StaleCommandDropped {
        /// Command that was ignored.
        command: Command,
    },
}
