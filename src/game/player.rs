use crate::config::*;
use crate::game::physics;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PlayerCell {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64, // split momentum, decays back to zero
    pub vy: f64,
    pub speed: f64,
    pub score: f64,
    pub split_cooldown: u32,
    pub color: String,
}

impl PlayerCell {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        PlayerCell {
            x,
            y,
            radius,
            vx: 0.0,
            vy: 0.0,
            speed: BASE_SPEED,
            score: radius * 2.0,
            split_cooldown: 0,
            color: random_color(),
        }
    }

    fn has_split_momentum(&self) -> bool {
        self.vx != 0.0 || self.vy != 0.0
    }

    /// Advance one tick: burn off split momentum, or seek the target.
    /// A cell never does both in the same tick.
    fn advance(&mut self, target_x: f64, target_y: f64) {
        if self.split_cooldown > 0 {
            self.split_cooldown -= 1;
        }

        if self.has_split_momentum() {
            self.x += self.vx;
            self.y += self.vy;
            self.vx *= SPLIT_DECEL;
            self.vy *= SPLIT_DECEL;
            if self.vx.abs() < SPLIT_STOP_EPSILON {
                self.vx = 0.0;
            }
            if self.vy.abs() < SPLIT_STOP_EPSILON {
                self.vy = 0.0;
            }
        } else {
            let dx = target_x - self.x;
            let dy = target_y - self.y;
            let dist = physics::distance(self.x, self.y, target_x, target_y);
            if dist > 0.0 {
                let speed = speed_for_radius(self.speed, self.radius);
                self.x += dx / dist * speed;
                self.y += dy / dist * speed;
            }
        }

        let (cx, cy) = physics::clamp_to_world(self.x, self.y, self.radius);
        self.x = cx;
        self.y = cy;
    }
}

pub struct PlayerCells {
    pub cells: Vec<PlayerCell>,
}

impl PlayerCells {
    /// One cell at world center with the starting radius.
    pub fn new() -> Self {
        PlayerCells {
            cells: vec![PlayerCell::new(
                WORLD_WIDTH / 2.0,
                WORLD_HEIGHT / 2.0,
                START_RADIUS,
            )],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn tick(&mut self, target_x: f64, target_y: f64) {
        for cell in &mut self.cells {
            cell.advance(target_x, target_y);
        }
    }

    /// Split every eligible cell toward the target point.
    ///
    /// The whole call is ignored once the set holds the maximum number of
    /// cells. Only cells present before the call are considered, so a cell
    /// spawned here is never split in the same invocation, and appends stop
    /// exactly at the cap.
    pub fn split(&mut self, target_x: f64, target_y: f64) {
        if self.cells.len() >= MAX_CELLS {
            return;
        }

        let current_count = self.cells.len();
        let mut new_cells = Vec::new();

        for cell in self.cells.iter_mut() {
            if cell.radius >= SPLIT_MIN_RADIUS
                && cell.split_cooldown == 0
                && current_count + new_cells.len() < MAX_CELLS
            {
                let angle = (target_y - cell.y).atan2(target_x - cell.x);

                // Halving the area: both halves get radius / sqrt(2)
                cell.radius /= std::f64::consts::SQRT_2;

                let mut new_cell = PlayerCell::new(cell.x, cell.y, cell.radius);
                new_cell.vx = angle.cos() * SPLIT_LAUNCH_SPEED;
                new_cell.vy = angle.sin() * SPLIT_LAUNCH_SPEED;
                new_cell.split_cooldown = SPLIT_COOLDOWN_TICKS;
                cell.split_cooldown = SPLIT_COOLDOWN_TICKS;

                new_cells.push(new_cell);
            }
        }

        if !new_cells.is_empty() {
            debug!(spawned = new_cells.len(), total = current_count + new_cells.len(), "split");
        }
        self.cells.extend(new_cells);
    }

    pub fn total_score(&self) -> f64 {
        self.cells.iter().map(|c| c.score).sum()
    }
}

fn random_color() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let colors = [
        "#FF4136", "#FF6B35", "#FFDC00", "#2ECC40", "#0074D9",
        "#7FDBFF", "#B10DC9", "#F012BE", "#FF69B4", "#01FF70",
        "#3D9970", "#39CCCC", "#E65100", "#00BCD4", "#8BC34A",
    ];
    colors[rng.gen_range(0..colors.len())].to_string()
}
