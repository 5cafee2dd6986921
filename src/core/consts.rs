pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;
pub const DEFAULT_TILE_SIZE: i32 = 64;
pub const DEFAULT_INPUT_POLL_MS: u64 = 50;
pub const DEFAULT_LOG_FILE: &str = "block_pusher.log";
