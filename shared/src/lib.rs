use std::time::Duration;

pub mod bindings;
pub mod frame;
pub mod game_state;
pub mod input;
pub mod intent;
pub mod layout;
pub mod paddle;
pub mod screen;
pub mod session;
#[cfg(test)]
mod testing;

/// cells a paddle extends above and below its centre row.
pub const DEFAULT_HALF_LENGTH: u16 = 2;
/// distance of each paddle from its side of the screen.
pub const DEFAULT_MARGIN: u16 = 20;
/// caps the display at roughly 50 frames per second.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(20);
