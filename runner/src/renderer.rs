use std::collections::HashSet;
use std::io::Write;

use snake_engine::{log, warn_log, Cell, GameState, GameStatus, Renderer};

const HEAD: char = '@';
const SEGMENT: char = 'o';
const FOOD: char = '*';
const EMPTY: char = '.';

/// Draws every frame as a character grid, one character per arena cell.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl TextRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    pub fn frame(state: &GameState) -> String {
        let arena = state.arena();
        let s = arena.segment_size;
        let head = state.body().head();
        let segments: HashSet<Cell> = state.body().iter().skip(1).copied().collect();

        let capacity = (arena.columns() + 1) * (arena.rows() + 2);
        let mut frame = String::with_capacity(capacity as usize);
        frame.push_str(&format!(
            "score {:>5} | length {:>3} | {}ms | {}\n",
            state.score(),
            state.body().len(),
            state.speed_ms(),
            status_label(state)
        ));
        for row in 0..arena.rows() {
            for column in 0..arena.columns() {
                let cell = Cell::new(column * s, row * s);
                let glyph = if cell == head {
                    HEAD
                } else if segments.contains(&cell) {
                    SEGMENT
                } else if cell == state.food() {
                    FOOD
                } else {
                    EMPTY
                };
                frame.push(glyph);
            }
            frame.push('\n');
        }
        frame
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, state: &GameState) {
        let frame = Self::frame(state);
        if let Err(e) = self
            .out
            .write_all(frame.as_bytes())
            .and_then(|_| self.out.flush())
        {
            warn_log!("Failed to draw frame: {}", e);
        }
    }
}

fn status_label(state: &GameState) -> String {
    match (state.status(), state.death_reason()) {
        (GameStatus::Running, _) => "running".to_string(),
        (GameStatus::Paused, _) => "paused".to_string(),
        (GameStatus::Over, Some(reason)) => format!("game over, snake {}", reason),
        (GameStatus::Over, None) => "game over".to_string(),
    }
}

/// Headless renderer: logs only score changes and status transitions.
#[derive(Default)]
pub struct StatusRenderer {
    last_score: Option<u32>,
    last_status: Option<GameStatus>,
}

impl StatusRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for StatusRenderer {
    fn render(&mut self, state: &GameState) {
        let status = state.status();
        if self.last_status != Some(status) {
            log!("Status: {} (score {})", status_label(state), state.score());
        } else if self.last_score.is_some_and(|score| score != state.score()) {
            log!(
                "Score {} | length {} | next tick in {}ms",
                state.score(),
                state.body().len(),
                state.speed_ms()
            );
        }
        self.last_status = Some(status);
        self.last_score = Some(state.score());
    }
}
