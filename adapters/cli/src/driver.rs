//! Serialized event loop tying input, timers, the world and the screen together.

use std::{ops::ControlFlow, sync::mpsc::Receiver};

use anyhow::{Context, Result};
use hazard_dash_core::{Command, Event};
use hazard_dash_rendering::{
    render, Glyphs, Intent, Presentation, RenderingBackend, Scene, Viewport,
};
use hazard_dash_system_bootstrap::Bootstrap;
use hazard_dash_system_pacing::{Pacing, TimerRequest};
use hazard_dash_world::{self as world, query, World};
use tracing::info;

use crate::timers::Scheduler;

/// Everything that can arrive on the driver's queue.
#[derive(Debug)]
pub(crate) enum Signal {
    /// The player pressed a recognised key.
    Input(Intent),
    /// A timer armed by the pacing system fired.
    Timer(Command),
    /// The terminal reported its current size.
    Resize(Viewport),
    /// Reading terminal input failed.
    InputFailed(std::io::Error),
}

/// Owns the session and applies queued signals one at a time.
pub(crate) struct Driver<S> {
    world: World,
    pacing: Pacing,
    scheduler: S,
    presentation: Presentation,
    events: Vec<Event>,
    requests: Vec<TimerRequest>,
}

impl<S: Scheduler> Driver<S> {
    /// Creates a driver around a fresh world.
    pub(crate) fn new(world: World, pacing: Pacing, scheduler: S) -> Self {
        let presentation = Presentation::new(Bootstrap.welcome_banner(&world), Glyphs::DEFAULT);
        Self {
            world,
            pacing,
            scheduler,
            presentation,
            events: Vec::new(),
            requests: Vec::new(),
        }
    }

    /// Processes signals until the player quits or the queue closes.
    pub(crate) fn run<B>(mut self, signals: Receiver<Signal>, backend: &mut B) -> Result<()>
    where
        B: RenderingBackend,
    {
        self.start(backend)?;
        for signal in signals {
            if self.handle(signal, backend)?.is_break() {
                break;
            }
        }
        info!("driver stopped");
        Ok(())
    }

    /// Announces the opening session and draws the first frame.
    pub(crate) fn start<B>(&mut self, backend: &mut B) -> Result<()>
    where
        B: RenderingBackend,
    {
        Bootstrap.opening_events(&self.world, &mut self.events);
        info!(
            session = query::session(&self.world).get(),
            "session started"
        );
        self.dispatch_events();
        self.present(backend)
    }

    /// Applies a single signal to completion.
    pub(crate) fn handle<B>(&mut self, signal: Signal, backend: &mut B) -> Result<ControlFlow<()>>
    where
        B: RenderingBackend,
    {
        let command = match signal {
            Signal::Input(Intent::Quit) => return Ok(ControlFlow::Break(())),
            Signal::Input(Intent::Move(direction)) => Command::Move { direction },
            Signal::Input(Intent::Restart) => Command::Restart,
            Signal::Timer(command) => command,
            Signal::Resize(viewport) => {
                self.presentation.viewport = Some(viewport);
                self.present(backend)?;
                return Ok(ControlFlow::Continue(()));
            }
            Signal::InputFailed(error) => {
                return Err(error).context("reading terminal input");
            }
        };

        world::apply(&mut self.world, command, &mut self.events);
        self.dispatch_events();
        self.present(backend)?;
        Ok(ControlFlow::Continue(()))
    }

    fn dispatch_events(&mut self) {
        self.pacing.handle(&self.events, &mut self.requests);
        self.events.clear();
        for request in self.requests.drain(..) {
            self.scheduler.schedule(request);
        }
    }

    fn present<B>(&self, backend: &mut B) -> Result<()>
    where
        B: RenderingBackend,
    {
        let snapshot = query::snapshot(&self.world);
        let scene = Scene::new(
            snapshot.grid,
            snapshot.phase,
            snapshot.level,
            snapshot.player,
            snapshot.target,
            snapshot.hazards,
        );
        backend.present(&render(&self.presentation, &scene))
    }
}
