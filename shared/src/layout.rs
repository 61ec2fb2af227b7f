use crate::{game_state::Mode, paddle::Paddle};

/// a (column, row) screen cell.
pub type Cell = (u16, u16);

pub const QUIT_HINT: &str = "hit 'ctrl + c' or 'q' to quit";
pub const LEFT_CONTROLS_HINT: &str = "s = ↓   d = ↑";
pub const RIGHT_CONTROLS_HINT: &str = "j = ↓   k = ↑";
pub const SOLO_CONTROLS_HINT: &str = "↑ / ↓ to move";
/// distance of the right-hand controls hint from the right edge of the screen.
pub const RIGHT_HINT_OFFSET: u16 = 20;

/// a fixed piece of HUD text, drawn left to right from its starting cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Label {
    pub text: &'static str,
    pub column: u16,
    pub row: u16,
}

/// cells covered by a paddle, centre first, then alternating above and below.
/// cells that would fall above row 0 are skipped.
pub fn glyph_cells(paddle: &Paddle) -> Vec<Cell> {
    let column = paddle.column();
    let row = paddle.row();
    let mut cells = Vec::with_capacity(2 * paddle.half_length() as usize + 1);
    cells.push((column, row));
    for offset in 1..=paddle.half_length() {
        if let Some(above) = row.checked_sub(offset) {
            cells.push((column, above));
        }
        cells.push((column, row.saturating_add(offset)));
    }
    cells
}

/// column of the paddle belonging to the player at `index`: player 1 hugs the left margin, player 2 the right.
pub fn paddle_column(index: usize, width: u16, margin: u16) -> u16 {
    if index == 0 {
        margin
    } else {
        width.saturating_sub(margin)
    }
}

pub fn paddle_start_row(height: u16) -> u16 {
    height / 2
}

/// HUD labels for the current frame; the right-hand hint follows the screen width.
pub fn hud_labels(mode: Mode, width: u16) -> Vec<Label> {
    let mut labels = vec![Label {
        text: QUIT_HINT,
        column: 1,
        row: 0,
    }];
    match mode {
        Mode::Versus => {
            labels.push(Label {
                text: LEFT_CONTROLS_HINT,
                column: 5,
                row: 1,
            });
            labels.push(Label {
                text: RIGHT_CONTROLS_HINT,
                column: width.saturating_sub(RIGHT_HINT_OFFSET),
                row: 1,
            });
        }
        Mode::Solo => labels.push(Label {
            text: SOLO_CONTROLS_HINT,
            column: 5,
            row: 1,
        }),
    }
    labels
}
