use std::{io, sync::mpsc::channel, thread::Builder};

use tracing::{error, info};

use crate::{
    frame::run_frames,
    game_state::{Game, Quit},
    input::InputListener,
    screen::{EventSource, Screen},
};

/// how a game ended. `finished` is `None` when the frame loop panicked;
/// its screen was dropped while unwinding.
#[derive(Debug)]
pub struct Outcome<S> {
    pub quit: Quit,
    pub finished: Option<(Game, S)>,
}

/// plays a game to the end on two named threads: `input_listener` blocks on `events`,
/// `frame_loop` owns `game` and `screen`.
/// waits for the first quit reason, joins the frame loop and finalizes the screen exactly once.
pub fn run<S, E>(game: Game, mut screen: S, mut events: E) -> io::Result<Outcome<S>>
where
    S: Screen + Send + 'static,
    E: EventSource + Send + 'static,
{
    let (game_over_tx, game_over_rx) = channel();
    let listener = InputListener::new(&game);
    let input_tx = game_over_tx.clone();
    if let Err(err) = Builder::new()
        .name("input_listener".to_owned())
        .spawn(move || {
            let quit = listener.listen(&mut events);
            let _ = input_tx.send(quit);
        })
    {
        if let Err(err) = screen.finalize() {
            error!(error = %err, "failed to restore terminal");
        }
        return Err(err);
    }

    let mut game = game;
    let frame_loop = Builder::new()
        .name("frame_loop".to_owned())
        .spawn(move || {
            if let Err(err) = run_frames(&mut game, &mut screen) {
                error!(error = %err, "failed to render frame");
                let _ = game_over_tx.send(Quit::RenderFailed);
            }
            (game, screen)
        })?;

    // the first reason wins; the input listener is the only sender on a normal quit.
    let quit = game_over_rx.recv().unwrap_or(Quit::InputFailed);
    let finished = match frame_loop.join() {
        Ok((game, mut screen)) => {
            if let Err(err) = screen.finalize() {
                error!(error = %err, "failed to restore terminal");
            }
            Some((game, screen))
        }
        Err(_) => None,
    };
    info!(?quit, "game over");
    Ok(Outcome { quit, finished })
}
