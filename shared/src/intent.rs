use std::sync::atomic::{AtomicU8, Ordering};

/// a one-shot movement request, consumed by the next frame whether or not the paddle could move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Intent {
    #[default]
    None,
    Up,
    Down,
}

impl From<Intent> for u8 {
    fn from(value: Intent) -> Self {
        match value {
            Intent::None => 0,
            Intent::Up => 1,
            Intent::Down => 2,
        }
    }
}

impl From<u8> for Intent {
    fn from(value: u8) -> Self {
        match value {
            1 => Intent::Up,
            2 => Intent::Down,
            _ => Intent::None,
        }
    }
}

/// single-slot mailbox for a paddle's pending intent.
/// the input listener is the only writer, the frame loop the only consumer.
/// a newer intent overwrites an unconsumed older one.
#[derive(Debug, Default)]
pub struct IntentSlot(AtomicU8);

impl IntentSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, intent: Intent) {
        self.0.store(intent.into(), Ordering::Release);
    }

    /// takes the pending intent, leaving [`Intent::None`] behind.
    pub fn take(&self) -> Intent {
        self.0.swap(Intent::None.into(), Ordering::AcqRel).into()
    }

    pub fn peek(&self) -> Intent {
        self.0.load(Ordering::Acquire).into()
    }
}
