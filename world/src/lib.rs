#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state management for Hazard Dash.
//!
//! The [`World`] owns the single mutable session. Every mutation flows
//! through [`apply`], which runs each command to completion before the caller
//! processes the next one, and reports what happened as [`Event`] values.

use hazard_dash_core::{
    CellCoord, Command, Direction, Event, GridSize, LevelNumber, Phase, SessionId, START_CELL,
    WELCOME_BANNER,
};
use hazard_dash_levels::{Catalog, Level};
use tracing::{debug, trace};

/// Represents the authoritative Hazard Dash session.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    catalog: Catalog,
    grid: GridSize,
    session: SessionId,
    phase: Phase,
    player: CellCoord,
    pending_move: Option<Direction>,
    level: Level,
    tick_index: u64,
}

impl World {
    /// Creates a new world playing the standard catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(Catalog::standard())
    }

    /// Creates a new world playing the provided catalog from level zero.
    ///
    /// A catalog without any level starts the session already won.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        let (phase, level) = first_level(&catalog);
        Self {
            banner: WELCOME_BANNER,
            catalog,
            grid: GridSize::STANDARD,
            session: SessionId::new(0),
            phase,
            player: START_CELL,
            pending_move: None,
            level,
            tick_index: 0,
        }
    }

    fn tick(&mut self, out_events: &mut Vec<Event>) {
        self.tick_index = self.tick_index.saturating_add(1);

        if let Some(direction) = self.pending_move.take() {
            let from = self.player;
            let to = from.stepped(direction, self.grid);
            if to != from {
                self.player = to;
                out_events.push(Event::PlayerMoved { from, to });
            }
        }

        if self.level.update(self.grid) {
            out_events.push(Event::HazardsAdvanced {
                level: self.level.number(),
            });
        }

        // Collision wins over arrival: a hazard on the target is a loss.
        if self.level.is_hazard(self.player) {
            self.phase = Phase::Lost;
            debug!(
                session = self.session.get(),
                level = self.level.number().get(),
                column = self.player.column(),
                row = self.player.row(),
                "player collided with a hazard"
            );
            out_events.push(Event::GameLost {
                session: self.session,
                cell: self.player,
            });
        } else if self.player == self.level.target() {
            self.phase = Phase::LevelComplete;
            debug!(
                session = self.session.get(),
                level = self.level.number().get(),
                "level completed"
            );
            out_events.push(Event::LevelCompleted {
                session: self.session,
                level: self.level.number(),
            });
        } else {
            out_events.push(Event::TickCompleted {
                session: self.session,
            });
        }
    }

    fn advance_level(&mut self, out_events: &mut Vec<Event>) {
        let next = self.level.number().next();
        match self.catalog.get_level(next) {
            Some(level) => {
                self.level = level;
                self.phase = Phase::Playing;
                self.pending_move = None;
                debug!(session = self.session.get(), level = next.get(), "level started");
                out_events.push(Event::LevelStarted {
                    session: self.session,
                    level: next,
                });
            }
            None => {
                self.phase = Phase::LevelWon;
                debug!(session = self.session.get(), "every level cleared");
                out_events.push(Event::GameWon {
                    session: self.session,
                });
            }
        }
    }

    fn restart(&mut self, out_events: &mut Vec<Event>) {
        let (phase, level) = first_level(&self.catalog);
        self.session = self.session.next();
        self.phase = phase;
        self.level = level;
        self.player = START_CELL;
        self.pending_move = None;
        self.tick_index = 0;
        debug!(session = self.session.get(), "session restarted");
        out_events.push(Event::SessionStarted {
            session: self.session,
            level: self.level.number(),
        });
    }

    fn accepts(&self, session: SessionId, phase: Phase) -> bool {
        self.session == session && self.phase == phase
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn first_level(catalog: &Catalog) -> (Phase, Level) {
    let first = LevelNumber::new(0);
    match catalog.get_level(first) {
        Some(level) => (Phase::Playing, level),
        None => (
            Phase::LevelWon,
            Level::new(first, START_CELL, Vec::new(), None),
        ),
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Directional moves are buffered only while playing and overwrite any move not
/// yet applied. Timer commands are honoured only when they carry the current
/// session and arrive in the phase that armed them; anything else is dropped
/// and reported with [`Event::StaleCommandDropped`]. Restarts are accepted
/// only once the session reached a terminal phase.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Move { direction } => {
            if world.phase == Phase::Playing {
                world.pending_move = Some(direction);
            }
        }
        Command::Tick { session } => {
            if world.accepts(session, Phase::Playing) {
                world.tick(out_events);
            } else {
                drop_stale(command, out_events);
            }
        }
        Command::AdvanceLevel { session } => {
            if world.accepts(session, Phase::LevelComplete) {
                world.advance_level(out_events);
            } else {
                drop_stale(command, out_events);
            }
        }
        Command::Restart => {
            if world.phase.is_terminal() {
                world.restart(out_events);
            }
        }
    }
}

fn drop_stale(command: Command, out_events: &mut Vec<Event>) {
    trace!(?command, "dropping stale timer command");
    out_events.push(Event::StaleCommandDropped { command });
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use serde::Serialize;

    use super::World;
    use hazard_dash_core::{CellCoord, Direction, GridSize, LevelNumber, Phase, SessionId};
    use hazard_dash_levels::Level;

    /// Retrieves the banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Identifier of the active session.
    #[must_use]
    pub fn session(world: &World) -> SessionId {
        world.session
    }

    /// Lifecycle phase of the active session.
    #[must_use]
    pub fn phase(world: &World) -> Phase {
        world.phase
    }

    /// Dimensions of the playing field.
    #[must_use]
    pub fn grid(world: &World) -> GridSize {
        world.grid
    }

    /// Cell currently occupied by the player.
    #[must_use]
    pub fn player(world: &World) -> CellCoord {
        world.player
    }

    /// Directional intent that the next tick will apply, if any.
    #[must_use]
    pub fn pending_move(world: &World) -> Option<Direction> {
        world.pending_move
    }

    /// Provides read-only access to the active level.
    #[must_use]
    pub fn level(world: &World) -> &Level {
        &world.level
    }

    /// Number of ticks processed by the active session.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// Captures an owned snapshot of everything a presentation layer needs.
    #[must_use]
    pub fn snapshot(world: &World) -> SessionSnapshot {
        SessionSnapshot {
            session: world.session,
            phase: world.phase,
            grid: world.grid,
            level: world.level.number(),
            player: world.player,
            target: world.level.target(),
            hazards: world.level.hazards().to_vec(),
        }
    }

    /// Read-only snapshot of a session captured between two commands.
    #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
    pub struct SessionSnapshot {
        /// Identifier of the captured session.
        pub session: SessionId,
        /// Lifecycle phase at capture time.
        pub phase: Phase,
        /// Dimensions of the playing field.
        pub grid: GridSize,
        /// Level being played.
        pub level: LevelNumber,
        /// Cell occupied by the player.
        pub player: CellCoord,
        /// Cell the player must reach.
        pub target: CellCoord,
        /// Hazard positions in authored order.
        pub hazards: Vec<CellCoord>,
    }
}
