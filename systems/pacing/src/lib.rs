#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pacing system that turns world events into timer requests.
//!
//! The world never schedules anything itself. After each command the adapter
//! feeds the resulting events through [`Pacing::handle`], which decides which
//! timer, if any, must be armed next: another tick while the session is in
//! play, a single delayed level transition once a level is completed, and
//! nothing at all once the session reached a terminal phase.

use std::time::Duration;

use hazard_dash_core::{Command, Event, SessionId};

const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);
const DEFAULT_LEVEL_TRANSITION_DELAY: Duration = Duration::from_millis(1000);

/// Configuration parameters required to construct the pacing system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    tick_interval: Duration,
    level_transition_delay: Duration,
}

impl Config {
    /// Creates a new configuration using the provided cadences.
    #[must_use]
    pub const fn new(tick_interval: Duration, level_transition_delay: Duration) -> Self {
        Self {
            tick_interval,
            level_transition_delay,
        }
    }

    /// Delay between two consecutive ticks.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Pause between completing a level and starting the next one.
    #[must_use]
    pub const fn level_transition_delay(&self) -> Duration {
        self.level_transition_delay
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL, DEFAULT_LEVEL_TRANSITION_DELAY)
    }
}

/// Request to deliver a command back to the world once a delay has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    /// Time to wait before delivering the command.
    pub delay: Duration,
    /// Command delivered when the timer fires.
    pub command: Command,
}

/// Pure system that arms the next timer for the active session.
#[derive(Debug)]
pub struct Pacing {
    config: Config,
}

impl Pacing {
    /// Creates a new pacing system using the supplied configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Configuration the system was created with.
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Consumes world events and emits the timers they call for.
    ///
    /// At most one request is emitted per session in a batch; the latest event
    /// of a session decides which timer it gets.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<TimerRequest>) {
        let mut pending: Vec<(SessionId, Option<TimerRequest>)> = Vec::new();

        for event in events {
            let Some((session, request)) = self.request_for(event) else {
                continue;
            };

            match pending.iter_mut().find(|(known, _)| *known == session) {
                Some(entry) => entry.1 = request,
                None => pending.push((session, request)),
            }
        }

        out.extend(pending.into_iter().filter_map(|(_, request)| request));
    }

    fn request_for(&self, event: &Event) -> Option<(SessionId, Option<TimerRequest>)> {
        match *event {
            Event::SessionStarted { session, .. }
            | Event::LevelStarted { session, .. }
            | Event::TickCompleted { session } => Some((
                session,
                Some(TimerRequest {
                    delay: self.config.tick_interval,
                    command: Command::Tick { session },
                }),
            )),
            Event::LevelCompleted { session, .. } => Some((
                session,
                Some(TimerRequest {
                    delay: self.config.level_transition_delay,
                    command: Command::AdvanceLevel { session },
                }),
            )),
            Event::GameLost { session, .. } | Event::GameWon { session } => Some((session, None)),
            Event::PlayerMoved { .. }
            | Event::HazardsAdvanced { .. }
            | Event::StaleCommandDropped { .. } => None,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_dash_core::{CellCoord, LevelNumber};

    #[test]
    fn defaults_match_reference_cadence() {
        let config = Config::default();

        assert_eq!(config.tick_interval(), Duration::from_millis(10));
        assert_eq!(config.level_transition_delay(), Duration::from_secs(1));
    }

    #[test]
    fn loss_in_same_batch_cancels_earlier_tick() {
        let mut pacing = Pacing::default();
        let session = SessionId::new(2);
        let mut out = Vec::new();

        pacing.handle(
            &[
                Event::SessionStarted {
                    session,
                    level: LevelNumber::new(0),
                },
                Event::GameLost {
                    session,
                    cell: CellCoord::new(5, 5),
                },
            ],
            &mut out,
        );

        assert!(out.is_empty());
    }
}
