use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use hazard_dash_core::{Command, Direction, Event, SessionId};
use hazard_dash_world::{self as world, query, World};

#[test]
fn deterministic_replay_produces_identical_outcomes() {
    let first = replay(scripted_commands());
    let second = replay(scripted_commands());

    assert_eq!(first, second, "replay diverged between runs");
    assert_eq!(first.fingerprint(), second.fingerprint());
}

#[test]
fn scripted_run_reaches_second_level() {
    let outcome = replay(scripted_commands());

    assert!(outcome
        .events
        .iter()
        .any(|event| matches!(event, Event::LevelStarted { .. })));
    assert_eq!(outcome.snapshot.level.get(), 1);
}

fn scripted_commands() -> Vec<Command> {
    let session = SessionId::new(0);
    let mut commands = Vec::new();

    // First level: target (50, 25) from (5, 5).
    for _ in 0..45 {
        commands.push(Command::Move {
            direction: Direction::Right,
        });
        commands.push(Command::Tick { session });
    }
    for _ in 0..20 {
        commands.push(Command::Move {
            direction: Direction::Down,
        });
        commands.push(Command::Tick { session });
    }
    commands.push(Command::AdvanceLevel { session });

    for _ in 0..40 {
        commands.push(Command::Move {
            direction: Direction::Up,
        });
        commands.push(Command::Tick { session });
    }

    commands
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct ReplayOutcome {
    events: Vec<Event>,
    snapshot: query::SessionSnapshot,
}

impl ReplayOutcome {
    fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

fn replay(commands: Vec<Command>) -> ReplayOutcome {
    let mut world = World::new();
    let mut log = Vec::new();

    for command in commands {
        world::apply(&mut world, command, &mut log);
    }

    ReplayOutcome {
        events: log,
        snapshot: query::snapshot(&world),
    }
}
