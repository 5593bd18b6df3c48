use hazard_dash_core::{
    CellCoord, Command, Direction, Event, GridSize, LevelNumber, Phase, SessionId,
};
use hazard_dash_levels::{hazard_grid, Catalog, HazardMotion, Level};
use hazard_dash_world::{self as world, query, World};

fn straight_run(number: LevelNumber) -> Level {
    Level::new(number, CellCoord::new(20, 5), Vec::new(), None)
}

fn short_hop(number: LevelNumber) -> Level {
    Level::new(number, CellCoord::new(20, 6), Vec::new(), None)
}

fn dense_lattice(number: LevelNumber) -> Level {
    Level::new(
        number,
        CellCoord::new(52, 17),
        hazard_grid(0, 0, 5, 5, GridSize::STANDARD),
        None,
    )
}

fn closing_gate(number: LevelNumber) -> Level {
    Level::new(
        number,
        CellCoord::new(6, 5),
        vec![CellCoord::new(7, 5)],
        Some(HazardMotion::new(-1, 0, 0)),
    )
}

fn slow_drift(number: LevelNumber) -> Level {
    Level::new(
        number,
        CellCoord::new(90, 20),
        vec![CellCoord::new(40, 0)],
        Some(HazardMotion::new(0, 1, 4)),
    )
}

fn send(world: &mut World, command: Command) -> Vec<Event> {
    let mut events = Vec::new();
    world::apply(world, command, &mut events);
    events
}

fn tick(world: &mut World) -> Vec<Event> {
    let session = query::session(world);
    send(world, Command::Tick { session })
}

fn step(world: &mut World, direction: Direction) -> Vec<Event> {
    let _ = send(world, Command::Move { direction });
    tick(world)
}

#[test]
fn walking_onto_target_completes_level_and_advances() {
    let mut world = World::with_catalog(Catalog::new(vec![straight_run, short_hop]));

    let batches: Vec<Vec<Event>> = (0..15)
        .map(|_| step(&mut world, Direction::Right))
        .collect();

    assert_eq!(query::player(&world), CellCoord::new(20, 5));
    assert_eq!(query::phase(&world), Phase::LevelComplete);
    assert_eq!(
        batches.last().and_then(|events| events.last()),
        Some(&Event::LevelCompleted {
            session: SessionId::new(0),
            level: LevelNumber::new(0),
        })
    );

    let session = query::session(&world);
    let events = send(&mut world, Command::AdvanceLevel { session });

    assert_eq!(
        events,
        vec![Event::LevelStarted {
            session,
            level: LevelNumber::new(1),
        }]
    );
    assert_eq!(query::phase(&world), Phase::Playing);
    assert_eq!(query::level(&world).number(), LevelNumber::new(1));
    assert_eq!(query::player(&world), CellCoord::new(20, 5));
}

#[test]
fn clearing_last_level_wins_the_game() {
    let mut world = World::with_catalog(Catalog::new(vec![straight_run]));
    for _ in 0..15 {
        let _ = step(&mut world, Direction::Right);
    }
    let session = query::session(&world);

    let events = send(&mut world, Command::AdvanceLevel { session });

    assert_eq!(events, vec![Event::GameWon { session }]);
    assert_eq!(query::phase(&world), Phase::LevelWon);
}

#[test]
fn dense_hazards_on_start_cell_lose_on_first_tick() {
    let mut world = World::with_catalog(Catalog::new(vec![dense_lattice]));

    let events = tick(&mut world);

    assert_eq!(
        events,
        vec![Event::GameLost {
            session: SessionId::new(0),
            cell: CellCoord::new(5, 5),
        }]
    );
    assert_eq!(query::phase(&world), Phase::Lost);
}

#[test]
fn arriving_on_target_with_a_hazard_is_a_loss() {
    let mut world = World::with_catalog(Catalog::new(vec![closing_gate]));

    let events = step(&mut world, Direction::Right);

    assert_eq!(query::player(&world), CellCoord::new(6, 5));
    assert!(query::level(&world).is_hazard(CellCoord::new(6, 5)));
    assert_eq!(query::phase(&world), Phase::Lost);
    assert!(!events
        .iter()
        .any(|event| matches!(event, Event::LevelCompleted { .. })));
}

#[test]
fn only_the_last_move_before_a_tick_takes_effect() {
    let mut world = World::new();

    let _ = send(
        &mut world,
        Command::Move {
            direction: Direction::Left,
        },
    );
    let _ = send(
        &mut world,
        Command::Move {
            direction: Direction::Up,
        },
    );
    let _ = tick(&mut world);

    assert_eq!(query::player(&world), CellCoord::new(5, 4));
}

#[test]
fn hazards_hold_still_between_motion_steps() {
    let mut world = World::with_catalog(Catalog::new(vec![slow_drift]));
    let initial = query::level(&world).hazards().to_vec();

    for _ in 0..4 {
        let events = tick(&mut world);
        assert!(!events
            .iter()
            .any(|event| matches!(event, Event::HazardsAdvanced { .. })));
        assert_eq!(query::level(&world).hazards(), initial.as_slice());
    }

    let events = tick(&mut world);

    assert!(events.contains(&Event::HazardsAdvanced {
        level: LevelNumber::new(0),
    }));
    assert_eq!(query::level(&world).hazards(), &[CellCoord::new(40, 1)]);
}

#[test]
fn restart_after_loss_begins_new_session_and_drops_old_timers() {
    let mut world = World::with_catalog(Catalog::new(vec![dense_lattice, straight_run]));
    let old_session = query::session(&world);
    let _ = tick(&mut world);
    assert_eq!(query::phase(&world), Phase::Lost);

    let events = send(&mut world, Command::Restart);
    let new_session = query::session(&world);

    assert_ne!(new_session, old_session);
    assert_eq!(
        events,
        vec![Event::SessionStarted {
            session: new_session,
            level: LevelNumber::new(0),
        }]
    );
    assert_eq!(query::phase(&world), Phase::Playing);
    assert_eq!(query::tick_index(&world), 0);

    let stale = Command::Tick {
        session: old_session,
    };
    assert_eq!(
        send(&mut world, stale),
        vec![Event::StaleCommandDropped { command: stale }]
    );
    assert_eq!(query::tick_index(&world), 0);
}

#[test]
fn moves_are_ignored_once_level_is_complete() {
    let mut world = World::with_catalog(Catalog::new(vec![straight_run, short_hop]));
    for _ in 0..15 {
        let _ = step(&mut world, Direction::Right);
    }

    let _ = send(
        &mut world,
        Command::Move {
            direction: Direction::Down,
        },
    );

    assert_eq!(query::pending_move(&world), None);

    let session = query::session(&world);
    let _ = send(&mut world, Command::AdvanceLevel { session });
    let events = tick(&mut world);

    assert_eq!(query::player(&world), CellCoord::new(20, 5));
    assert_eq!(events, vec![Event::TickCompleted { session }]);
}

#[test]
fn tick_is_dropped_after_game_is_lost() {
    let mut world = World::with_catalog(Catalog::new(vec![dense_lattice]));
    let _ = tick(&mut world);

    let events = tick(&mut world);

    assert!(matches!(
        events.as_slice(),
        [Event::StaleCommandDropped { .. }]
    ));
    assert_eq!(query::tick_index(&world), 1);
}
