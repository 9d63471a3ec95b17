use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tokio::time::{interval, Duration};

use crate::config::*;
use crate::game::camera::Viewport;
use crate::game::world::World;
use crate::input::InputState;

pub type SharedWorld = Arc<RwLock<World>>;
pub type SharedInput = Arc<Mutex<InputState>>;

pub fn create_world() -> SharedWorld {
    Arc::new(RwLock::new(World::new()))
}

pub fn create_input() -> SharedInput {
    Arc::new(Mutex::new(InputState::new()))
}

/// Drive the simulation the way a browser tab would: one tick per animation
/// frame, and a food top-up on its own fixed interval. The world lock keeps
/// the two arms mutually exclusive.
pub async fn game_loop(world: SharedWorld, input: SharedInput, viewport: Viewport) {
    let mut frame = interval(Duration::from_millis(TICK_DURATION_MS));
    let mut food_timer = interval(Duration::from_millis(FOOD_SPAWN_INTERVAL_MS));

    loop {
        tokio::select! {
            _ = frame.tick() => {
                let snapshot = input.lock().unwrap().snapshot();
                world.write().await.tick(&snapshot, viewport);
            }
            _ = food_timer.tick() => {
                world.write().await.food.top_up();
            }
        }
    }
}
