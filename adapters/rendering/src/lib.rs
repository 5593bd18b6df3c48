#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Hazard Dash adapters.
//!
//! Adapters capture a [`Scene`] from the world after every command, turn it
//! into a text [`Frame`] with [`render`], and hand the frame to a
//! [`RenderingBackend`]. Input travels the other way as [`Intent`] values.

use std::collections::HashSet;

use anyhow::Result as AnyResult;
use hazard_dash_core::{CellCoord, Direction, GridSize, LevelNumber, Phase};

const PLAY_AGAIN_PROMPT: &str = "Press enter to play again!";
const QUIT_PROMPT: &str = "Press q or ctrl+c to quit.";

/// Symbols used to draw each kind of grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    /// Cell occupied by the player.
    pub player: char,
    /// Cell the player must reach.
    pub target: char,
    /// Cell occupied by a hazard.
    pub hazard: char,
    /// Any other cell.
    pub empty: char,
}

impl Glyphs {
    /// Glyph set used by the terminal adapter.
    pub const DEFAULT: Self = Self {
        player: 'A',
        target: '@',
        hazard: '#',
        empty: '.',
    };
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Player intents recognised by the core, independent of the input device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Step in the provided direction on the next tick.
    Move(Direction),
    /// Start over after winning or losing.
    Restart,
    /// Leave the game.
    Quit,
}

/// Read-only snapshot of everything a frame shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    /// Dimensions of the playing field.
    pub grid: GridSize,
    /// Lifecycle phase of the session.
    pub phase: Phase,
    /// Level being played.
    pub level: LevelNumber,
    /// Cell occupied by the player.
    pub player: CellCoord,
    /// Cell the player must reach.
    pub target: CellCoord,
    /// Cells occupied by hazards.
    pub hazards: Vec<CellCoord>,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new(
        grid: GridSize,
        phase: Phase,
        level: LevelNumber,
        player: CellCoord,
        target: CellCoord,
        hazards: Vec<CellCoord>,
    ) -> Self {
        Self {
            grid,
            phase,
            level,
            player,
            target,
            hazards,
        }
    }
}

/// Size of the surface a frame is shown on, in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Number of character columns.
    pub columns: u16,
    /// Number of character rows.
    pub rows: u16,
}

/// Presentation descriptor consumed by [`render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    /// Title shown in the frame header.
    pub title: String,
    /// Symbols used for grid cells.
    pub glyphs: Glyphs,
    /// Last reported surface size, shown in the header once known.
    pub viewport: Option<Viewport>,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(title: T, glyphs: Glyphs) -> Self
    where
        T: Into<String>,
    {
        Self {
            title: title.into(),
            glyphs,
            viewport: None,
        }
    }
}

/// Fully rendered text frame, one entry per terminal line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    /// Lines composing the frame, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Joins the frame into a single newline-separated string.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Renders the scene into a text frame.
///
/// The frame is a header, a body and a footer. The header carries the title
/// and, once known, the viewport as `(rows, columns)`. While playing, the
/// body is the full grid; cells holding a hazard show the hazard glyph even
/// when the player or target shares the cell. Other phases replace the grid
/// with a status message.
#[must_use]
pub fn render(presentation: &Presentation, scene: &Scene) -> Frame {
    let mut lines = vec![presentation.title.clone(), String::new()];
    if let Some(viewport) = presentation.viewport {
        lines.push(format!("({}, {})", viewport.rows, viewport.columns));
    }

    match scene.phase {
        Phase::Playing => render_grid(&presentation.glyphs, scene, &mut lines),
        Phase::LevelComplete => lines.push(format!("You beat level {}!", scene.level.get())),
        Phase::LevelWon => {
            lines.extend([
                "You Win!!!!".to_owned(),
                String::new(),
                PLAY_AGAIN_PROMPT.to_owned(),
            ]);
        }
        Phase::Lost => {
            lines.extend([
                "You Lose!!!!".to_owned(),
                String::new(),
                PLAY_AGAIN_PROMPT.to_owned(),
            ]);
        }
    }

    lines.push(String::new());
    lines.push(QUIT_PROMPT.to_owned());
    Frame { lines }
}

fn render_grid(glyphs: &Glyphs, scene: &Scene, lines: &mut Vec<String>) {
    let hazards: HashSet<CellCoord> = scene.hazards.iter().copied().collect();

    for row in 0..scene.grid.rows() {
        let line: String = (0..scene.grid.columns())
            .map(|column| {
                let cell = CellCoord::new(column, row);
                if hazards.contains(&cell) {
                    glyphs.hazard
                } else if cell == scene.player {
                    glyphs.player
                } else if cell == scene.target {
                    glyphs.target
                } else {
                    glyphs.empty
                }
            })
            .collect();
        lines.push(line);
    }
}

/// Rendering backend capable of presenting Hazard Dash frames.
pub trait RenderingBackend {
    /// Replaces whatever the backend currently shows with the provided frame.
    fn present(&mut self, frame: &Frame) -> AnyResult<()>;
}
