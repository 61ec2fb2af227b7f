use std::{error::Error, fmt::Display, io};

use crate::bindings::Key;

/// screen size in character cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extent {
    pub width: u16,
    pub height: u16,
}

impl Extent {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        bold: false,
        dim: false,
    };
    pub const BOLD: Style = Style {
        bold: true,
        dim: false,
    };
    pub const DIM: Style = Style {
        bold: false,
        dim: true,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Resize(Extent),
    /// mouse, focus, paste and anything else the game has no use for.
    Other,
}

/// the drawing half of the terminal.
/// cells outside the current extent are clipped by the implementation.
pub trait Screen {
    fn extent(&self) -> Extent;

    fn clear(&mut self);

    fn set_cell(&mut self, column: u16, row: u16, glyph: char, style: Style);

    /// makes everything drawn since the last [`Screen::clear`] visible.
    fn present(&mut self) -> Result<(), ScreenError>;

    /// re-reads the terminal size and discards any state tied to the old one.
    fn resync(&mut self) -> Result<(), ScreenError>;

    /// restores the terminal. calling it more than once is a no-op.
    fn finalize(&mut self) -> Result<(), ScreenError>;

    fn draw_text(&mut self, text: &str, column: u16, row: u16, style: Style) {
        for (i, glyph) in text.chars().enumerate() {
            match u16::try_from(i).ok().and_then(|i| column.checked_add(i)) {
                Some(column) => self.set_cell(column, row, glyph, style),
                None => break,
            }
        }
    }
}

/// remembers whether a screen has been restored so that only the first finalize does any work.
#[derive(Debug, Default)]
pub struct FinalizeOnce(bool);

impl FinalizeOnce {
    /// returns true exactly once, for the call that should restore the terminal.
    pub fn begin(&mut self) -> bool {
        !std::mem::replace(&mut self.0, true)
    }

    pub fn is_done(&self) -> bool {
        self.0
    }
}

/// the blocking input half of the terminal.
pub trait EventSource {
    fn next_event(&mut self) -> Result<InputEvent, ScreenError>;
}

#[derive(Debug)]
pub enum ScreenError {
    Init(io::Error),
    Io(io::Error),
}

impl Display for ScreenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenError::Init(err) => write!(f, "failed to initialise terminal: {err}"),
            ScreenError::Io(err) => write!(f, "terminal i/o failed: {err}"),
        }
    }
}

impl Error for ScreenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScreenError::Init(source) | ScreenError::Io(source) => Some(source),
        }
    }
}

impl From<io::Error> for ScreenError {
    fn from(value: io::Error) -> Self {
        ScreenError::Io(value)
    }
}
