#[cfg(target_arch = "wasm32")]
pub mod canvas;

use crate::config::*;
use crate::game::camera::Viewport;
use crate::game::world::World;

/// The primitive drawing contract the renderer needs. Any 2D backend that
/// can fill rects and circles, stroke rects, and draw lines satisfies it.
pub trait RenderSurface {
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: &'static str,
    pub grid: &'static str,
    pub border: &'static str,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: "#f0f0f0",
        grid: "#ddd",
        border: "#000",
    };

    pub const DARK: Theme = Theme {
        background: "#1a1a1a",
        grid: "#333",
        border: "#fff",
    };
}

/// Paint one frame: background, grid, visible food, all cells, world
/// outline, in that order. Reads simulation state, never mutates it.
pub fn draw(surface: &mut dyn RenderSurface, world: &World, viewport: Viewport, theme: &Theme) {
    let camera = world.camera;

    surface.set_fill_style(theme.background);
    surface.fill_rect(0.0, 0.0, viewport.width, viewport.height);

    // grid scrolls with the camera
    surface.set_stroke_style(theme.grid);
    surface.set_line_width(1.0);
    let mut x = -(camera.x % GRID_SIZE);
    while x <= viewport.width {
        surface.draw_line(x, 0.0, x, viewport.height);
        x += GRID_SIZE;
    }
    let mut y = -(camera.y % GRID_SIZE);
    while y <= viewport.height {
        surface.draw_line(0.0, y, viewport.width, y);
        y += GRID_SIZE;
    }

    // food is culled to the viewport; there can be hundreds off-screen
    for food in &world.food.foods {
        let visible = food.x + FOOD_RADIUS > camera.x
            && food.x - FOOD_RADIUS < camera.x + viewport.width
            && food.y + FOOD_RADIUS > camera.y
            && food.y - FOOD_RADIUS < camera.y + viewport.height;
        if visible {
            let (sx, sy) = camera.world_to_screen(food.x, food.y);
            surface.set_fill_style(&food.color);
            surface.fill_circle(sx, sy, FOOD_RADIUS);
        }
    }

    // cells are few; drawn unconditionally
    for cell in &world.players.cells {
        let (sx, sy) = camera.world_to_screen(cell.x, cell.y);
        surface.set_fill_style(&cell.color);
        surface.fill_circle(sx, sy, cell.radius);
    }

    surface.set_stroke_style(theme.border);
    surface.set_line_width(2.0);
    let (bx, by) = camera.world_to_screen(0.0, 0.0);
    surface.stroke_rect(bx, by, WORLD_WIDTH, WORLD_HEIGHT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::camera::Camera;
    use crate::game::food::{Food, FoodField};
    use crate::game::player::PlayerCells;

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[derive(Default)]
    struct Recorder {
        ops: Vec<String>,
    }

    impl RenderSurface for Recorder {
        fn set_fill_style(&mut self, color: &str) {
            self.ops.push(format!("fill_style {color}"));
        }
        fn set_stroke_style(&mut self, color: &str) {
            self.ops.push(format!("stroke_style {color}"));
        }
        fn set_line_width(&mut self, width: f64) {
            self.ops.push(format!("line_width {width}"));
        }
        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.ops.push(format!("fill_rect {x} {y} {width} {height}"));
        }
        fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.ops.push(format!("stroke_rect {x} {y} {width} {height}"));
        }
        fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
            self.ops.push(format!("circle {x} {y} {radius}"));
        }
        fn draw_line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64) {
            self.ops.push("line".to_string());
        }
    }

    fn food_at(x: f64, y: f64) -> Food {
        Food {
            x,
            y,
            color: "#FF6384".to_string(),
        }
    }

    fn test_world(foods: Vec<Food>) -> World {
        let players = PlayerCells::new();
        let score = players.total_score();
        World {
            players,
            food: FoodField { foods },
            camera: Camera::default(),
            score,
        }
    }

    #[test]
    fn offscreen_food_is_culled_but_cells_are_not() {
        // camera at the origin: only the first food is in view; the cell at
        // world center is far off-screen yet still drawn
        let world = test_world(vec![food_at(100.0, 100.0), food_at(5000.0, 5000.0)]);
        let mut recorder = Recorder::default();

        draw(&mut recorder, &world, VIEWPORT, &Theme::LIGHT);

        let circles = recorder
            .ops
            .iter()
            .filter(|op| op.starts_with("circle"))
            .count();
        assert_eq!(circles, 2); // one food + one cell
    }

    #[test]
    fn background_is_first_and_border_is_last() {
        let world = test_world(Vec::new());
        let mut recorder = Recorder::default();

        draw(&mut recorder, &world, VIEWPORT, &Theme::DARK);

        assert_eq!(recorder.ops[0], format!("fill_style {}", Theme::DARK.background));
        assert!(recorder.ops[1].starts_with("fill_rect"));
        assert!(recorder.ops.last().unwrap().starts_with("stroke_rect"));
    }

    #[test]
    fn grid_covers_the_viewport() {
        let world = test_world(Vec::new());
        let mut recorder = Recorder::default();

        draw(&mut recorder, &world, VIEWPORT, &Theme::LIGHT);

        let lines = recorder.ops.iter().filter(|op| *op == "line").count();
        // 17 vertical + 13 horizontal for an 800x600 viewport at the origin
        assert_eq!(lines, 17 + 13);
    }
}
