use std::{env, time::Duration};

use shared::DEFAULT_FRAME_INTERVAL;

// Runtime settings read from the environment (not gameplay tuning).

pub fn frame_interval() -> Duration {
    env::var("PONG_FRAME_INTERVAL_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_FRAME_INTERVAL)
}

pub fn json_logs() -> bool {
    matches!(env::var("LOG_FORMAT").as_deref(), Ok("json"))
}
