use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use crate::{
    intent::{Intent, IntentSlot},
    layout::{paddle_column, paddle_start_row},
    paddle::Paddle,
    screen::Extent,
    DEFAULT_FRAME_INTERVAL, DEFAULT_HALF_LENGTH, DEFAULT_MARGIN,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// two players sharing one keyboard.
    #[default]
    Versus,
    /// a single paddle driven by the arrow keys.
    Solo,
}

impl Mode {
    pub fn player_count(self) -> usize {
        match self {
            Mode::Versus => 2,
            Mode::Solo => 1,
        }
    }
}

/// why the game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quit {
    Interrupt,
    QuitKey,
    InputFailed,
    RenderFailed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: Mode,
    pub half_length: u16,
    /// distance of each paddle from its side of the screen.
    pub margin: u16,
    pub frame_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            half_length: DEFAULT_HALF_LENGTH,
            margin: DEFAULT_MARGIN,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

/// on until stopped, never back on.
#[derive(Debug)]
pub struct RunFlag(AtomicBool);

impl RunFlag {
    pub fn new() -> Self {
        Self(AtomicBool::new(true))
    }

    pub fn is_on(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// returns whether this call was the one that turned the flag off.
    pub fn stop(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// everything the input listener writes and the frame loop reads.
/// each field has exactly one writer (the listener) and one consumer (the frame loop).
#[derive(Debug)]
pub struct Controls {
    run: RunFlag,
    resync: AtomicBool,
    intents: Vec<Arc<IntentSlot>>,
}

impl Controls {
    pub fn is_running(&self) -> bool {
        self.run.is_on()
    }

    pub fn stop(&self) -> bool {
        self.run.stop()
    }

    pub fn request_resync(&self) {
        self.resync.store(true, Ordering::Release);
    }

    pub fn take_resync(&self) -> bool {
        self.resync.swap(false, Ordering::AcqRel)
    }

    /// sets the intent of the paddle owned by the player at `index`; unknown players are ignored.
    pub fn set_intent(&self, index: usize, intent: Intent) {
        if let Some(slot) = self.intents.get(index) {
            slot.set(intent);
        }
    }
}

#[derive(Debug)]
pub struct Player {
    name: String,
    score: u32,
    paddle: Paddle,
}

impl Player {
    fn new(number: usize, paddle: Paddle) -> Self {
        Self {
            name: format!("Player {number}"),
            score: 0,
            paddle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }
}

/// state owned by the frame loop. positions live here; intents and the run flag arrive through [`Controls`].
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    players: Vec<Player>,
    controls: Arc<Controls>,
}

impl Game {
    pub fn new(config: GameConfig, extent: Extent) -> Self {
        let players = (0..config.mode.player_count())
            .map(|index| {
                let paddle = Paddle::new(
                    paddle_column(index, extent.width, config.margin),
                    paddle_start_row(extent.height),
                    config.half_length,
                );
                Player::new(index + 1, paddle)
            })
            .collect::<Vec<_>>();
        let controls = Arc::new(Controls {
            run: RunFlag::new(),
            resync: AtomicBool::new(false),
            intents: players
                .iter()
                .map(|player| Arc::clone(player.paddle.intent()))
                .collect(),
        });
        Self {
            config,
            players,
            controls,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn controls(&self) -> &Arc<Controls> {
        &self.controls
    }

    pub fn is_running(&self) -> bool {
        self.controls.is_running()
    }

    /// applies every paddle's pending intent against the given screen height.
    pub fn apply_movement(&mut self, height: u16) {
        for player in &mut self.players {
            player.paddle.apply(height);
        }
    }
}
