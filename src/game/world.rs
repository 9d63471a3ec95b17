use crate::game::camera::{Camera, Viewport};
use crate::game::food::FoodField;
use crate::game::player::PlayerCells;
use crate::input::InputSnapshot;

/// The whole simulation context. Nothing outside `tick` and
/// `FoodField::top_up` mutates entity state.
pub struct World {
    pub players: PlayerCells,
    pub food: FoodField,
    pub camera: Camera,
    pub score: f64,
}

impl World {
    pub fn new() -> Self {
        let players = PlayerCells::new();
        let score = players.total_score();
        World {
            players,
            food: FoodField::new(),
            camera: Camera::default(),
            score,
        }
    }

    /// One simulation step.
    ///
    /// The pointer is resolved against the camera as of the previous tick,
    /// the same mapping the player saw when aiming.
    pub fn tick(&mut self, input: &InputSnapshot, viewport: Viewport) {
        let (target_x, target_y) = self
            .camera
            .screen_to_world(input.pointer_x, input.pointer_y);

        if input.split {
            self.players.split(target_x, target_y);
        }

        self.players.tick(target_x, target_y);

        for cell in &mut self.players.cells {
            self.food.collide_and_consume(cell);
        }

        self.score = self.players.total_score();
        self.camera.update(&self.players.cells, viewport);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
