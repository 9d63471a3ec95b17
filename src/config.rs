// Game world constants
pub const WORLD_WIDTH: f64 = 10000.0;
pub const WORLD_HEIGHT: f64 = 10000.0;
pub const TICK_RATE: u64 = 60; // simulation frames per second for the native driver
pub const TICK_DURATION_MS: u64 = 1000 / TICK_RATE;

// Player constants
pub const START_RADIUS: f64 = 20.0;
pub const BASE_SPEED: f64 = 5.0; // distance per tick at the reference radius
pub const SPEED_REFERENCE_RADIUS: f64 = 20.0;
pub const MAX_CELLS: usize = 16;

// Split constants
pub const SPLIT_MIN_RADIUS: f64 = 20.0;
pub const SPLIT_LAUNCH_SPEED: f64 = 15.0;
pub const SPLIT_DECEL: f64 = 0.95; // momentum retained per tick
pub const SPLIT_STOP_EPSILON: f64 = 0.1; // components below this snap to zero
pub const SPLIT_COOLDOWN_TICKS: u32 = 10;

// Food constants
pub const MAX_FOOD: usize = 500;
pub const FOOD_RADIUS: f64 = 5.0;
pub const FOOD_SCORE: f64 = 10.0;
pub const FOOD_GROWTH: f64 = 0.5; // radius gained per food eaten
pub const FOOD_SPAWN_INTERVAL_MS: u64 = 100;

// Rendering
pub const GRID_SIZE: f64 = 50.0;

// Helper: seek speed for a cell of the given radius (bigger cells move slower)
pub fn speed_for_radius(base_speed: f64, radius: f64) -> f64 {
    base_speed * (SPEED_REFERENCE_RADIUS / radius)
}
