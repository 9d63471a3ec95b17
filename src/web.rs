use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::game::camera::Viewport;
use crate::game::world::World;
use crate::input::InputState;
use crate::render::canvas::CanvasSurface;
use crate::render::{self, Theme};

/// Browser entry point. The host page owns the DOM and the
/// requestAnimationFrame loop: it feeds pointer and key events in through
/// the setters, calls `tick` then `draw` once per frame, runs `top_up_food`
/// on its own 100 ms interval, and reads `score` for the score element.
#[wasm_bindgen]
pub struct Game {
    world: World,
    input: InputState,
    dark_mode: bool,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        console_error_panic_hook::set_once();
        Game {
            world: World::new(),
            input: InputState::new(),
            dark_mode: false,
        }
    }

    /// Pointer position in viewport coordinates.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.input.set_pointer(x, y);
    }

    /// Edge-triggered; the next tick consumes it.
    pub fn request_split(&mut self) {
        self.input.request_split();
    }

    pub fn set_dark_mode(&mut self, on: bool) {
        self.dark_mode = on;
    }

    /// Advance the simulation by one frame.
    pub fn tick(&mut self, viewport_width: f64, viewport_height: f64) {
        let snapshot = self.input.snapshot();
        let viewport = Viewport {
            width: viewport_width,
            height: viewport_height,
        };
        self.world.tick(&snapshot, viewport);
    }

    /// Food replenishment, driven by the host timer independently of the
    /// frame rate.
    pub fn top_up_food(&mut self) {
        self.world.food.top_up();
    }

    pub fn draw(&self, ctx: &CanvasRenderingContext2d, viewport_width: f64, viewport_height: f64) {
        let theme = if self.dark_mode {
            Theme::DARK
        } else {
            Theme::LIGHT
        };
        let viewport = Viewport {
            width: viewport_width,
            height: viewport_height,
        };
        let mut surface = CanvasSurface::new(ctx);
        render::draw(&mut surface, &self.world, viewport, &theme);
    }

    /// Aggregate score, floored for display.
    pub fn score(&self) -> f64 {
        self.world.score.floor()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
