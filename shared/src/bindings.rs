use crate::game_state::{Mode, Quit};

/// a key press, independent of the terminal library that reported it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    /// ctrl + c, delivered as a key because the terminal is in raw mode.
    Interrupt,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// move the paddle of the player at this index up.
    Up(usize),
    /// move the paddle of the player at this index down.
    Down(usize),
    Quit(Quit),
}

const VERSUS_BINDINGS: &[(Key, Action)] = &[
    (Key::Char('s'), Action::Down(0)),
    (Key::Char('d'), Action::Up(0)),
    (Key::Char('j'), Action::Down(1)),
    (Key::Down, Action::Down(1)),
    (Key::Char('k'), Action::Up(1)),
    (Key::Up, Action::Up(1)),
    (Key::Interrupt, Action::Quit(Quit::Interrupt)),
    (Key::Char('q'), Action::Quit(Quit::QuitKey)),
];

const SOLO_BINDINGS: &[(Key, Action)] = &[
    (Key::Down, Action::Down(0)),
    (Key::Up, Action::Up(0)),
    (Key::Interrupt, Action::Quit(Quit::Interrupt)),
    (Key::Char('q'), Action::Quit(Quit::QuitKey)),
];

pub fn bindings(mode: Mode) -> &'static [(Key, Action)] {
    match mode {
        Mode::Versus => VERSUS_BINDINGS,
        Mode::Solo => SOLO_BINDINGS,
    }
}

pub fn action_for(mode: Mode, key: Key) -> Option<Action> {
    bindings(mode)
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, action)| *action)
}
