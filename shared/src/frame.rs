use std::thread::sleep;

use tracing::{debug, info};

use crate::{
    game_state::Game,
    layout::{glyph_cells, hud_labels},
    paddle::PADDLE_GLYPH,
    screen::{Screen, ScreenError, Style},
};

/// advances and draws one frame.
/// a pending resync is honoured first so that movement clamps against the current height.
pub fn run_frame<S: Screen>(game: &mut Game, screen: &mut S) -> Result<(), ScreenError> {
    if game.controls().take_resync() {
        screen.resync()?;
        debug!(extent = ?screen.extent(), "screen resynced");
    }
    let extent = screen.extent();
    game.apply_movement(extent.height);

    screen.clear();
    for label in hud_labels(game.config().mode, extent.width) {
        screen.draw_text(label.text, label.column, label.row, Style::DIM);
    }
    for player in game.players() {
        for (column, row) in glyph_cells(player.paddle()) {
            screen.set_cell(column, row, PADDLE_GLYPH, Style::BOLD);
        }
    }
    screen.present()
}

/// renders frames until the run flag goes off, sleeping the frame interval after each one.
/// returns the number of frames rendered. the screen is left for the caller to finalize.
pub fn run_frames<S: Screen>(game: &mut Game, screen: &mut S) -> Result<u64, ScreenError> {
    let mut frames = 0;
    while game.is_running() {
        run_frame(game, screen)?;
        frames += 1;
        sleep(game.config().frame_interval);
    }
    info!(frames, "frame loop stopped");
    Ok(frames)
}
