use std::sync::Arc;

use tracing::trace;

use crate::intent::{Intent, IntentSlot};

/// the glyph drawn for every paddle cell.
pub const PADDLE_GLYPH: char = '|';

/// a player's vertical bat.
/// `column` is fixed at creation; `row` is the centre cell and is only ever advanced by [`Paddle::apply`].
#[derive(Debug)]
pub struct Paddle {
    column: u16,
    row: u16,
    half_length: u16,
    intent: Arc<IntentSlot>,
}

impl Paddle {
    pub fn new(column: u16, row: u16, half_length: u16) -> Self {
        Self {
            column,
            row,
            half_length,
            intent: Arc::new(IntentSlot::new()),
        }
    }

    pub fn column(&self) -> u16 {
        self.column
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn half_length(&self) -> u16 {
        self.half_length
    }

    /// handle to this paddle's pending intent, shared with the input listener.
    pub fn intent(&self) -> &Arc<IntentSlot> {
        &self.intent
    }

    /// inclusive range of rows the centre may occupy so that every glyph cell stays on screen.
    /// on a screen too short to fit the paddle both ends collapse to `half_length`.
    pub fn bounds(&self, height: u16) -> (u16, u16) {
        let top = self.half_length;
        let bottom = height.saturating_sub(1 + self.half_length).max(top);
        (top, bottom)
    }

    /// consumes the pending intent and moves at most one cell towards it.
    /// a move against the boundary is absorbed, not retried.
    pub fn apply(&mut self, height: u16) {
        let (top, bottom) = self.bounds(height);
        match self.intent.take() {
            Intent::Up if self.row > top => self.row -= 1,
            Intent::Down if self.row < bottom => self.row += 1,
            Intent::Up | Intent::Down => {
                trace!(column = self.column, row = self.row, "paddle move absorbed at boundary")
            }
            Intent::None => {}
        }
        // the screen may have shrunk since the last frame.
        self.row = self.row.clamp(top, bottom);
    }
}
