use std::io::{stdout, Stdout, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use shared::{
    bindings::Key,
    screen::{EventSource, Extent, FinalizeOnce, InputEvent, Screen, ScreenError, Style},
};
use tracing::warn;

const BLANK: (char, Style) = (' ', Style::PLAIN);

/// full-screen crossterm terminal with a back buffer.
/// the terminal is restored by [`Screen::finalize`] or, failing that, on drop.
pub struct CrosstermScreen {
    stdout: Stdout,
    extent: Extent,
    cells: Vec<(char, Style)>,
    finalize_once: FinalizeOnce,
}

impl CrosstermScreen {
    pub fn new() -> Result<Self, ScreenError> {
        enable_raw_mode().map_err(ScreenError::Init)?;
        let mut screen = Self {
            stdout: stdout(),
            extent: Extent::default(),
            cells: Vec::new(),
            finalize_once: FinalizeOnce::default(),
        };
        execute!(
            screen.stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )
        .map_err(ScreenError::Init)?;
        let (width, height) = terminal::size().map_err(ScreenError::Init)?;
        screen.resize_buffer(Extent::new(width, height));
        Ok(screen)
    }

    fn resize_buffer(&mut self, extent: Extent) {
        self.extent = extent;
        self.cells = vec![BLANK; extent.width as usize * extent.height as usize];
    }

    fn apply_style<W: Write>(w: &mut W, style: Style) -> Result<(), ScreenError> {
        queue!(w, SetAttribute(Attribute::Reset))?;
        if style.bold {
            queue!(w, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(w, SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Screen for CrosstermScreen {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn set_cell(&mut self, column: u16, row: u16, glyph: char, style: Style) {
        if column >= self.extent.width || row >= self.extent.height {
            return;
        }
        let idx = row as usize * self.extent.width as usize + column as usize;
        self.cells[idx] = (glyph, style);
    }

    fn present(&mut self) -> Result<(), ScreenError> {
        let width = self.extent.width as usize;
        let mut w = self.stdout.lock();
        let mut current = Style::PLAIN;
        Self::apply_style(&mut w, current)?;
        if width > 0 {
            for (row, line) in self.cells.chunks(width).enumerate() {
                queue!(w, MoveTo(0, row as u16))?;
                for &(glyph, style) in line {
                    if style != current {
                        Self::apply_style(&mut w, style)?;
                        current = style;
                    }
                    queue!(w, Print(glyph))?;
                }
            }
        }
        queue!(w, SetAttribute(Attribute::Reset))?;
        w.flush()?;
        Ok(())
    }

    fn resync(&mut self) -> Result<(), ScreenError> {
        let (width, height) = terminal::size()?;
        self.resize_buffer(Extent::new(width, height));
        execute!(self.stdout, Clear(ClearType::All))?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), ScreenError> {
        if !self.finalize_once.begin() {
            return Ok(());
        }
        execute!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;
        disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for CrosstermScreen {
    fn drop(&mut self) {
        if let Err(err) = self.finalize() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}

/// blocking reader over crossterm's global event queue.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> Result<InputEvent, ScreenError> {
        Ok(translate(event::read()?))
    }
}

fn translate(event: Event) -> InputEvent {
    match event {
        Event::Key(key_event) => InputEvent::Key(translate_key(key_event)),
        Event::Resize(width, height) => InputEvent::Resize(Extent::new(width, height)),
        _ => InputEvent::Other,
    }
}

fn translate_key(key_event: KeyEvent) -> Key {
    if key_event.kind == KeyEventKind::Release {
        return Key::Other;
    }
    if key_event.modifiers == KeyModifiers::CONTROL {
        return match key_event.code {
            KeyCode::Char('c') => Key::Interrupt,
            _ => Key::Other,
        };
    }
    match key_event.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Char(c)
            if key_event.modifiers == KeyModifiers::NONE
                || key_event.modifiers == KeyModifiers::SHIFT =>
        {
            Key::Char(c)
        }
        _ => Key::Other,
    }
}
