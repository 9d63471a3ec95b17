use crate::config::*;
use crate::game::player::PlayerCell;

/// Current size of the render surface, re-read from the host every tick.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Top-left of the viewport in world coordinates, derived from the cell
/// centroid. No zoom; mapping is pure translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
}

impl Camera {
    pub fn update(&mut self, cells: &[PlayerCell], viewport: Viewport) {
        if cells.is_empty() {
            return;
        }
        let n = cells.len() as f64;
        let center_x = cells.iter().map(|c| c.x).sum::<f64>() / n;
        let center_y = cells.iter().map(|c| c.y).sum::<f64>() / n;

        self.x = (center_x - viewport.width / 2.0)
            .min(WORLD_WIDTH - viewport.width)
            .max(0.0);
        self.y = (center_y - viewport.height / 2.0)
            .min(WORLD_HEIGHT - viewport.height)
            .max(0.0);
    }

    pub fn world_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.x, y - self.y)
    }

    pub fn screen_to_world(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.x, y + self.y)
    }
}
