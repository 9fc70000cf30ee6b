//! Turn-shape classification for snake body segments
//!
//! Rendering-only: nothing in movement or collision depends on this.

use super::state::Cell;

/// Which corner of a cell a body joint bends around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentOrientation {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Straight,
}

/// Classify the joint at `curr` given its neighbours in body order
/// (`prev` is nearer the head, `next` nearer the tail).
pub fn classify_segment_orientation(prev: Cell, curr: Cell, next: Cell) -> SegmentOrientation {
    use SegmentOrientation::*;

    if curr.x == prev.x && curr.y == next.y {
        if curr.y < prev.y {
            return if curr.x < next.x { TopLeft } else { TopRight };
        }
        if curr.y > prev.y {
            return if curr.x < next.x { BottomLeft } else { BottomRight };
        }
    } else if curr.y == prev.y && curr.x == next.x {
        if curr.x < prev.x {
            return if curr.y < next.y { TopLeft } else { BottomLeft };
        }
        if curr.x > prev.x {
            return if curr.y < next.y { TopRight } else { BottomRight };
        }
    }

    Straight
}

#[cfg(test)]
mod tests {
    use super::*;
    use SegmentOrientation::*;

    fn classify(prev: (i32, i32), curr: (i32, i32), next: (i32, i32)) -> SegmentOrientation {
        classify_segment_orientation(
            Cell::new(prev.0, prev.1),
            Cell::new(curr.0, curr.1),
            Cell::new(next.0, next.1),
        )
    }

    #[test]
    fn test_straight_segments() {
        assert_eq!(classify((6, 10), (5, 10), (4, 10)), Straight);
        assert_eq!(classify((5, 9), (5, 10), (5, 11)), Straight);
    }

    #[test]
    fn test_prev_below() {
        // curr sits above prev
        assert_eq!(classify((5, 6), (5, 5), (6, 5)), TopLeft);
        assert_eq!(classify((5, 6), (5, 5), (4, 5)), TopRight);
    }

    #[test]
    fn test_prev_above() {
        assert_eq!(classify((5, 4), (5, 5), (6, 5)), BottomLeft);
        assert_eq!(classify((5, 4), (5, 5), (4, 5)), BottomRight);
    }

    #[test]
    fn test_prev_right() {
        assert_eq!(classify((6, 5), (5, 5), (5, 6)), TopLeft);
        assert_eq!(classify((6, 5), (5, 5), (5, 4)), BottomLeft);
    }

    #[test]
    fn test_prev_left() {
        assert_eq!(classify((4, 5), (5, 5), (5, 6)), TopRight);
        assert_eq!(classify((4, 5), (5, 5), (5, 4)), BottomRight);
    }

    #[test]
    fn test_looped_body_corners() {
        // [(10,10),(9,10),(8,10),(8,9)] turns up at (8,10)
        assert_eq!(classify((9, 10), (8, 10), (8, 9)), BottomLeft);
    }
}
