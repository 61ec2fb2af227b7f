use std::sync::Arc;

use tracing::{debug, error};

use crate::{
    bindings::{action_for, Action},
    game_state::{Controls, Game, Mode, Quit},
    intent::Intent,
    screen::{EventSource, InputEvent},
};

/// turns terminal events into intents, resync requests and the stop signal.
/// the listener is the only writer of those fields.
#[derive(Debug, Clone)]
pub struct InputListener {
    mode: Mode,
    controls: Arc<Controls>,
}

impl InputListener {
    pub fn new(game: &Game) -> Self {
        Self {
            mode: game.config().mode,
            controls: Arc::clone(game.controls()),
        }
    }

    /// handles one event, returning the quit reason once a quit key has been seen.
    pub fn dispatch_event(&self, event: InputEvent) -> Option<Quit> {
        match event {
            InputEvent::Resize(extent) => {
                debug!(width = extent.width, height = extent.height, "terminal resized");
                self.controls.request_resync();
                None
            }
            InputEvent::Key(key) => match action_for(self.mode, key)? {
                Action::Up(player) => {
                    self.controls.set_intent(player, Intent::Up);
                    None
                }
                Action::Down(player) => {
                    self.controls.set_intent(player, Intent::Down);
                    None
                }
                Action::Quit(quit) => {
                    self.controls.stop();
                    debug!(?quit, "quit requested");
                    Some(quit)
                }
            },
            InputEvent::Other => None,
        }
    }

    /// blocks on `events` until a quit key arrives or the source fails.
    /// either way the run flag is off when this returns.
    pub fn listen<E: EventSource>(&self, events: &mut E) -> Quit {
        loop {
            match events.next_event() {
                Ok(event) => {
                    if let Some(quit) = self.dispatch_event(event) {
                        return quit;
                    }
                }
                Err(err) => {
                    error!(error = %err, "failed to read terminal input");
                    self.controls.stop();
                    return Quit::InputFailed;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        bindings::Key,
        game_state::{Game, GameConfig, Mode, Quit},
        intent::Intent,
        screen::{Extent, InputEvent},
        testing::ScriptedEvents,
    };

    use super::InputListener;

    fn versus() -> Game {
        Game::new(GameConfig::default(), Extent::new(80, 24))
    }

    fn intents(game: &Game) -> Vec<Intent> {
        game.players()
            .iter()
            .map(|player| player.paddle().intent().peek())
            .collect()
    }

    #[test]
    fn movement_keys_set_intents() {
        let game = versus();
        let listener = InputListener::new(&game);
        assert_eq!(listener.dispatch_event(InputEvent::Key(Key::Char('d'))), None);
        assert_eq!(listener.dispatch_event(InputEvent::Key(Key::Down)), None);
        assert_eq!(intents(&game), vec![Intent::Up, Intent::Down]);
        listener.dispatch_event(InputEvent::Key(Key::Char('s')));
        listener.dispatch_event(InputEvent::Key(Key::Char('k')));
        assert_eq!(intents(&game), vec![Intent::Down, Intent::Up]);
    }

    #[test]
    fn quit_key_stops_the_game() {
        let game = versus();
        let listener = InputListener::new(&game);
        assert_eq!(
            listener.dispatch_event(InputEvent::Key(Key::Char('q'))),
            Some(Quit::QuitKey)
        );
        assert!(!game.is_running());
    }

    #[test]
    fn interrupt_stops_the_game() {
        let game = versus();
        let listener = InputListener::new(&game);
        assert_eq!(
            listener.dispatch_event(InputEvent::Key(Key::Interrupt)),
            Some(Quit::Interrupt)
        );
        assert!(!game.is_running());
    }

    #[test]
    fn resize_requests_resync_without_moving() {
        let game = versus();
        let listener = InputListener::new(&game);
        assert_eq!(
            listener.dispatch_event(InputEvent::Resize(Extent::new(100, 30))),
            None
        );
        assert!(game.controls().take_resync());
        assert_eq!(intents(&game), vec![Intent::None, Intent::None]);
    }

    #[test]
    fn unbound_events_are_ignored() {
        let config = GameConfig {
            mode: Mode::Solo,
            ..GameConfig::default()
        };
        let game = Game::new(config, Extent::new(80, 24));
        let listener = InputListener::new(&game);
        for event in [
            InputEvent::Key(Key::Char('s')),
            InputEvent::Key(Key::Other),
            InputEvent::Other,
        ] {
            assert_eq!(listener.dispatch_event(event), None);
        }
        assert_eq!(intents(&game), vec![Intent::None]);
        assert!(game.is_running());
    }

    #[test]
    fn listen_returns_on_quit() {
        let game = versus();
        let listener = InputListener::new(&game);
        let mut events = ScriptedEvents::new([
            InputEvent::Key(Key::Char('x')),
            InputEvent::Key(Key::Up),
            InputEvent::Key(Key::Char('q')),
            InputEvent::Key(Key::Char('d')),
        ]);
        assert_eq!(listener.listen(&mut events), Quit::QuitKey);
        assert_eq!(intents(&game), vec![Intent::None, Intent::Up]);
        assert_eq!(events.0.len(), 1);
    }

    #[test]
    fn listen_stops_when_input_fails() {
        let game = versus();
        let listener = InputListener::new(&game);
        let mut events = ScriptedEvents::new([InputEvent::Other]);
        assert_eq!(listener.listen(&mut events), Quit::InputFailed);
        assert!(!game.is_running());
    }
}
