#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the Hazard Dash experience.

use hazard_dash_core::Event;
use hazard_dash_world::{query, World};

/// Produces data required to greet the player and start the first session.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner<'world>(&self, world: &'world World) -> &'world str {
        query::welcome_banner(world)
    }

    /// Emits the events announcing the session a freshly created world holds.
    ///
    /// Pacing reacts to these exactly as it does to a restart, which arms the
    /// first tick of the session.
    pub fn opening_events(&self, world: &World, out: &mut Vec<Event>) {
        out.push(Event::SessionStarted {
            session: query::session(world),
            level: query::level(world).number(),
        });
    }
}
