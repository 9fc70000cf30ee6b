use crate::game::Direction;

/// Infers a direction from a pointer gesture.
///
/// The displacement is measured from the release point back to the origin,
/// so dragging towards smaller x means `Left`. The axis with the larger
/// displacement wins; ties go to the vertical axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SwipeTracker {
    origin: Option<(i32, i32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, x: i32, y: i32) {
        self.origin = Some((x, y));
    }

    /// Resolve the gesture ending at `(x, y)` and clear the origin.
    /// Returns `None` without an origin or when the pointer did not move.
    pub fn finish(&mut self, x: i32, y: i32) -> Option<Direction> {
        let (initial_x, initial_y) = self.origin.take()?;
        let delta_x = initial_x - x;
        let delta_y = initial_y - y;

        if delta_x == 0 && delta_y == 0 {
            return None;
        }

        let direction = if delta_x.abs() > delta_y.abs() {
            if delta_x > 0 {
                Direction::Left
            } else {
                Direction::Right
            }
        } else if delta_y > 0 {
            Direction::Up
        } else {
            Direction::Down
        };

        Some(direction)
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }
}
