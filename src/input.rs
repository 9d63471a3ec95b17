/// Last-known pointer position plus a pending split request, written by host
/// input events whenever they arrive. Last write wins.
#[derive(Debug, Default)]
pub struct InputState {
    pointer_x: f64,
    pointer_y: f64,
    split_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        InputState::default()
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer_x = x;
        self.pointer_y = y;
    }

    pub fn request_split(&mut self) {
        self.split_requested = true;
    }

    /// Sample the state for one tick. Consumes the split request, so one
    /// key press yields exactly one split attempt.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let split = self.split_requested;
        self.split_requested = false;
        InputSnapshot {
            pointer_x: self.pointer_x,
            pointer_y: self.pointer_y,
            split,
        }
    }
}

/// What one tick sees of the input devices.
#[derive(Debug, Clone, Copy)]
pub struct InputSnapshot {
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub split: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_is_last_write_wins() {
        let mut input = InputState::new();
        input.set_pointer(10.0, 20.0);
        input.set_pointer(30.0, 40.0);
        let snap = input.snapshot();
        assert_eq!((snap.pointer_x, snap.pointer_y), (30.0, 40.0));
    }

    #[test]
    fn split_request_is_consumed_by_the_snapshot() {
        let mut input = InputState::new();
        input.request_split();
        assert!(input.snapshot().split);
        assert!(!input.snapshot().split);
    }

    #[test]
    fn pointer_survives_the_snapshot() {
        let mut input = InputState::new();
        input.set_pointer(5.0, 6.0);
        input.snapshot();
        let snap = input.snapshot();
        assert_eq!((snap.pointer_x, snap.pointer_y), (5.0, 6.0));
    }
}
