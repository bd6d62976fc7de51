// Fixed-rate loop
pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;

// Terminal rendering
pub const STATUS_BAR_HEIGHT: u16 = 2;
pub const MIN_PLAY_AREA_WIDTH: u16 = 20;
pub const MIN_PLAY_AREA_HEIGHT: u16 = 10;

// Pipe caps drawn just outside the gap (presentation only, not part of the hitbox)
pub const CAP_HEIGHT: f64 = 20.0;
pub const CAP_OVERHANG: f64 = 5.0;

// Simulator defaults
pub const SIM_DEFAULT_TICKS: u64 = 3_600;
pub const SIM_DEFAULT_SEED: u64 = 42;
