//! Keyboard handling for the terminal adapter.

use std::{sync::mpsc::Sender, thread};

use crossterm::{
    event::{self, Event as TerminalEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use hazard_dash_core::Direction;
use hazard_dash_rendering::{Intent, Viewport};

use crate::driver::Signal;

/// Maps a key press to the intent it stands for.
///
/// Vi-style `h`/`j`/`k`/`l` and the arrow keys move, enter restarts, `q` and
/// ctrl+c quit. Releases, repeats of other keys and unknown keys map to
/// nothing.
pub(crate) fn intent_for(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Intent::Quit),
        KeyCode::Char('q') => Some(Intent::Quit),
        KeyCode::Char('k') | KeyCode::Up => Some(Intent::Move(Direction::Up)),
        KeyCode::Char('j') | KeyCode::Down => Some(Intent::Move(Direction::Down)),
        KeyCode::Char('h') | KeyCode::Left => Some(Intent::Move(Direction::Left)),
        KeyCode::Char('l') | KeyCode::Right => Some(Intent::Move(Direction::Right)),
        KeyCode::Enter => Some(Intent::Restart),
        _ => None,
    }
}

/// Spawns the thread that reads terminal input and forwards intents.
///
/// The current terminal size is forwarded first and again on every resize.
/// A read failure is forwarded once as [`Signal::InputFailed`] and ends the
/// thread, as does a closed signal queue.
pub(crate) fn spawn_key_reader(signals: Sender<Signal>) {
    let _ = thread::spawn(move || {
        if let Ok((columns, rows)) = terminal::size() {
            if signals.send(resized(columns, rows)).is_err() {
                return;
            }
        }

        loop {
            let signal = match event::read() {
                Ok(TerminalEvent::Key(key)) => match intent_for(key) {
                    Some(intent) => Signal::Input(intent),
                    None => continue,
                },
                Ok(TerminalEvent::Resize(columns, rows)) => resized(columns, rows),
                Ok(_) => continue,
                Err(error) => {
                    let _ = signals.send(Signal::InputFailed(error));
                    return;
                }
            };

            if signals.send(signal).is_err() {
                return;
            }
        }
    });
}

fn resized(columns: u16, rows: u16) -> Signal {
    Signal::Resize(Viewport { columns, rows })
}
