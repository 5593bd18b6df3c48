//! Timer thread that turns pacing requests into delayed signals.
//!
//! Timers never read or write the world. Each armed request sleeps until its
//! deadline and then enqueues exactly one [`Signal::Timer`] on the shared
//! queue; the driver decides what the command means when it arrives.

use std::{
    sync::mpsc::{self, Receiver, RecvTimeoutError, Sender},
    thread,
    time::Instant,
};

use hazard_dash_core::Command;
use hazard_dash_system_pacing::TimerRequest;
use tracing::trace;

use crate::driver::Signal;

/// Destination for timer requests emitted by the pacing system.
pub(crate) trait Scheduler {
    /// Arms a timer that delivers `request.command` after `request.delay`.
    fn schedule(&mut self, request: TimerRequest);
}

/// Scheduler backed by a dedicated timer thread.
#[derive(Debug)]
pub(crate) struct ThreadScheduler {
    requests: Sender<TimerRequest>,
}

impl ThreadScheduler {
    /// Spawns the timer thread delivering fired commands to `signals`.
    ///
    /// The thread exits once either the scheduler or the signal queue is gone.
    pub(crate) fn spawn(signals: Sender<Signal>) -> Self {
        let (requests, armed) = mpsc::channel();
        let _ = thread::spawn(move || run_timers(armed, signals));
        Self { requests }
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&mut self, request: TimerRequest) {
        if self.requests.send(request).is_err() {
            trace!(?request, "timer thread gone, request discarded");
        }
    }
}

fn run_timers(requests: Receiver<TimerRequest>, signals: Sender<Signal>) {
    let mut armed: Vec<(Instant, Command)> = Vec::new();

    loop {
        let now = Instant::now();
        armed.sort_by_key(|(deadline, _)| *deadline);
        let due = armed.partition_point(|(deadline, _)| *deadline <= now);
        for (_, command) in armed.drain(..due) {
            if signals.send(Signal::Timer(command)).is_err() {
                return;
            }
        }

        let received = match armed.first() {
            Some((deadline, _)) => requests.recv_timeout(deadline.saturating_duration_since(now)),
            None => requests
                .recv()
                .map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(request) => armed.push((Instant::now() + request.delay, request.command)),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return,
        }
    }
}
