use std::{
    collections::{HashMap, VecDeque},
    io,
    sync::mpsc::Receiver,
};

use crate::{
    layout::Cell,
    screen::{EventSource, Extent, FinalizeOnce, InputEvent, Screen, ScreenError, Style},
};

/// in-memory screen that keeps every presented frame.
#[derive(Debug, Default)]
pub struct RecordingScreen {
    pub extent: Extent,
    /// extent reported after the next resync, standing in for a terminal that was resized.
    pub resized_to: Option<Extent>,
    pub cells: HashMap<Cell, (char, Style)>,
    pub frames: Vec<HashMap<Cell, (char, Style)>>,
    pub resyncs: usize,
    /// present fails once this many frames have been shown.
    pub fail_after_frames: Option<usize>,
    /// times the screen was actually restored.
    pub finalized: usize,
    finalize_once: FinalizeOnce,
}

impl RecordingScreen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            extent: Extent::new(width, height),
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> &HashMap<Cell, (char, Style)> {
        self.frames.last().expect("no frame presented")
    }

    pub fn text_at(&self, column: u16, row: u16, len: usize) -> String {
        let frame = self.last_frame();
        (column..)
            .take(len)
            .map(|column| frame.get(&(column, row)).map_or(' ', |(glyph, _)| *glyph))
            .collect()
    }
}

impl Screen for RecordingScreen {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn clear(&mut self) {
        self.cells.clear();
    }

    fn set_cell(&mut self, column: u16, row: u16, glyph: char, style: Style) {
        if column < self.extent.width && row < self.extent.height {
            self.cells.insert((column, row), (glyph, style));
        }
    }

    fn present(&mut self) -> Result<(), ScreenError> {
        if self.fail_after_frames == Some(self.frames.len()) {
            return Err(ScreenError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "terminal went away",
            )));
        }
        self.frames.push(self.cells.clone());
        Ok(())
    }

    fn resync(&mut self) -> Result<(), ScreenError> {
        self.resyncs += 1;
        if let Some(extent) = self.resized_to.take() {
            self.extent = extent;
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), ScreenError> {
        if self.finalize_once.begin() {
            self.finalized += 1;
        }
        Ok(())
    }
}

/// replays a fixed list of events, then reports the input as closed.
#[derive(Debug, Default)]
pub struct ScriptedEvents(pub VecDeque<InputEvent>);

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self(events.into_iter().collect())
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> Result<InputEvent, ScreenError> {
        self.0.pop_front().ok_or_else(|| {
            ScreenError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no more scripted events",
            ))
        })
    }
}

/// blocks until the test sends an event, and fails once the sender is dropped.
#[derive(Debug)]
pub struct ChannelEvents(pub Receiver<InputEvent>);

impl EventSource for ChannelEvents {
    fn next_event(&mut self) -> Result<InputEvent, ScreenError> {
        self.0.recv().map_err(|_| {
            ScreenError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "event sender dropped",
            ))
        })
    }
}
