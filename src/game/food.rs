use crate::config::*;
use crate::game::physics;
use crate::game::player::PlayerCell;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Food {
    pub x: f64,
    pub y: f64,
    pub color: String,
}

impl Food {
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let colors = [
            "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF",
            "#FF9F40", "#E7E9ED", "#7CB342", "#F06292", "#4DD0E1",
        ];
        Food {
            x: rng.gen_range(0.0..WORLD_WIDTH),
            y: rng.gen_range(0.0..WORLD_HEIGHT),
            color: colors[rng.gen_range(0..colors.len())].to_string(),
        }
    }
}

pub struct FoodField {
    pub foods: Vec<Food>,
}

impl FoodField {
    /// Seeded up to the cap; the cap holds from then on.
    pub fn new() -> Self {
        let mut foods = Vec::with_capacity(MAX_FOOD);
        for _ in 0..MAX_FOOD {
            foods.push(Food::random());
        }
        FoodField { foods }
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn spawn_one(&mut self) {
        self.foods.push(Food::random());
    }

    /// Periodic replenishment: one food per call while below the cap.
    pub fn top_up(&mut self) {
        if self.foods.len() < MAX_FOOD {
            self.spawn_one();
        }
    }

    /// Feed one cell: every overlapping food is removed, grows the cell,
    /// and is replaced by a fresh spawn, so the count is conserved.
    /// Returns the number of pickups.
    pub fn collide_and_consume(&mut self, cell: &mut PlayerCell) -> usize {
        let mut eaten = Vec::new();
        for (i, food) in self.foods.iter().enumerate() {
            if physics::circles_overlap(cell.x, cell.y, cell.radius, food.x, food.y, FOOD_RADIUS) {
                eaten.push(i);
            }
        }

        // highest index first so earlier removals do not shift later ones
        for &i in eaten.iter().rev() {
            self.foods.swap_remove(i);
        }

        let count = eaten.len();
        for _ in 0..count {
            cell.score += FOOD_SCORE;
            cell.radius += FOOD_GROWTH;
            self.spawn_one();
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_at(x: f64, y: f64) -> Food {
        Food {
            x,
            y,
            color: "#FF6384".to_string(),
        }
    }

    fn field_with(foods: Vec<Food>) -> FoodField {
        FoodField { foods }
    }

    #[test]
    fn top_up_respects_the_cap() {
        let mut field = FoodField::new();
        assert_eq!(field.len(), MAX_FOOD);
        field.top_up();
        assert_eq!(field.len(), MAX_FOOD);

        field.foods.pop();
        field.top_up();
        assert_eq!(field.len(), MAX_FOOD);
    }

    #[test]
    fn pickup_replaces_eaten_food() {
        let mut cell = PlayerCell::new(100.0, 100.0, 20.0);
        let score_before = cell.score;
        let mut field = field_with(vec![food_at(100.0, 100.0), food_at(5000.0, 5000.0)]);

        let eaten = field.collide_and_consume(&mut cell);

        assert_eq!(eaten, 1);
        assert_eq!(field.len(), 2);
        assert_eq!(cell.radius, 20.0 + FOOD_GROWTH);
        assert_eq!(cell.score, score_before + FOOD_SCORE);
    }

    #[test]
    fn all_overlapping_foods_are_consumed_in_one_pass() {
        let mut cell = PlayerCell::new(100.0, 100.0, 20.0);
        // adjacent entries both overlap; removal must not skip the second
        let mut field = field_with(vec![
            food_at(100.0, 100.0),
            food_at(105.0, 100.0),
            food_at(5000.0, 5000.0),
        ]);

        let eaten = field.collide_and_consume(&mut cell);

        assert_eq!(eaten, 2);
        assert_eq!(field.len(), 3);
        assert_eq!(cell.radius, 21.0);
        assert_eq!(cell.score, 40.0 + 2.0 * FOOD_SCORE);
    }

    #[test]
    fn far_food_is_untouched() {
        let mut cell = PlayerCell::new(100.0, 100.0, 20.0);
        let mut field = field_with(vec![food_at(500.0, 500.0)]);
        assert_eq!(field.collide_and_consume(&mut cell), 0);
        assert_eq!(field.len(), 1);
        assert_eq!(cell.radius, 20.0);
    }

    #[test]
    fn touching_food_is_not_a_pickup() {
        // centers exactly radius + FOOD_RADIUS apart: strict overlap fails
        let mut cell = PlayerCell::new(100.0, 100.0, 20.0);
        let mut field = field_with(vec![food_at(125.0, 100.0)]);
        assert_eq!(field.collide_and_consume(&mut cell), 0);
        assert_eq!(field.len(), 1);
    }
}
