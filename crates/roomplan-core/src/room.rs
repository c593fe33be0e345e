//! The mutable room rectangle: dimensions, rotation, position, budget.

use crate::error::{Error, Result};

/// A named rectangular room. Unplaced until the search assigns a position;
/// width/height may grow beyond the originals during expansion, bounded by
/// `max_expansion` (total added units across both axes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub(crate) name: String,
    pub(crate) original_width: i32,
    pub(crate) original_height: i32,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) position: Option<(i32, i32)>,
    pub(crate) rotated: bool,
    pub(crate) max_expansion: i32,
}

impl Room {
    /// Default expansion budget when a caller does not specify one.
    pub const DEFAULT_MAX_EXPANSION: i32 = 20;

    pub fn new(name: impl Into<String>, width: i32, height: i32, max_expansion: i32) -> Result<Self> {
        let name = name.into();
        if width <= 0 || height <= 0 || max_expansion < 0 {
            return Err(Error::InvalidDimensions {
                name,
                width,
                height,
                max_expansion,
            });
        }
        Ok(Room {
            name,
            original_width: width,
            original_height: height,
            width,
            height,
            position: None,
            rotated: false,
            max_expansion,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn original_width(&self) -> i32 {
        self.original_width
    }

    pub fn original_height(&self) -> i32 {
        self.original_height
    }

    pub fn position(&self) -> Option<(i32, i32)> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    pub fn rotated(&self) -> bool {
        self.rotated
    }

    pub fn max_expansion(&self) -> i32 {
        self.max_expansion
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Swap current width/height and toggle the rotation flag. Two calls
    /// restore the original orientation.
    pub(crate) fn rotate(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
        self.rotated = !self.rotated;
    }

    /// Restore width/height to the originals, respecting the current
    /// rotation flag (a rotated room resets to the swapped pair).
    pub(crate) fn reset_to_original(&mut self) {
        if self.rotated {
            self.width = self.original_height;
            self.height = self.original_width;
        } else {
            self.width = self.original_width;
            self.height = self.original_height;
        }
    }

    /// Original width as it applies to the current orientation.
    pub(crate) fn effective_original_width(&self) -> i32 {
        if self.rotated {
            self.original_height
        } else {
            self.original_width
        }
    }

    /// Original height as it applies to the current orientation.
    pub(crate) fn effective_original_height(&self) -> i32 {
        if self.rotated {
            self.original_width
        } else {
            self.original_height
        }
    }

    /// Expansion units consumed so far, summed across both axes.
    pub fn expansion_used(&self) -> i32 {
        (self.width - self.effective_original_width())
            + (self.height - self.effective_original_height())
    }

    /// `(left, right, bottom, top)` of the placed rectangle, or `None`
    /// while unplaced.
    pub fn bounds(&self) -> Option<(i32, i32, i32, i32)> {
        let (x, y) = self.position?;
        Some((x, x + self.width, y, y + self.height))
    }

    /// True when the two placed rectangles share a wall segment: one pair
    /// of facing edges coincides exactly and the overlapping span on the
    /// perpendicular axis is strictly positive. Corner contact does not
    /// count. Always false if either room is unplaced.
    pub fn shares_wall_with(&self, other: &Room) -> bool {
        let (left1, right1, bottom1, top1) = match self.bounds() {
            Some(b) => b,
            None => return false,
        };
        let (left2, right2, bottom2, top2) = match other.bounds() {
            Some(b) => b,
            None => return false,
        };

        // Vertical wall: one room's right edge meets the other's left edge.
        if right1 == left2 || right2 == left1 {
            if bottom1.max(bottom2) < top1.min(top2) {
                return true;
            }
        }
        // Horizontal wall: one room's top edge meets the other's bottom edge.
        if top1 == bottom2 || top2 == bottom1 {
            if left1.max(left2) < right1.min(right2) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(name: &str, x: i32, y: i32, w: i32, h: i32) -> Room {
        let mut room = Room::new(name, w, h, 20).unwrap();
        room.position = Some((x, y));
        room
    }

    #[test]
    fn test_invalid_definitions_rejected() {
        assert!(Room::new("a", 0, 3, 20).is_err());
        assert!(Room::new("a", 3, -1, 20).is_err());
        assert!(Room::new("a", 3, 3, -1).is_err());
        assert!(Room::new("a", 1, 1, 0).is_ok(), "zero budget is legal");
    }

    #[test]
    fn test_rotate_twice_restores_orientation() {
        let mut room = Room::new("a", 4, 3, 20).unwrap();
        room.rotate();
        assert_eq!((room.width(), room.height()), (3, 4));
        assert!(room.rotated());
        room.rotate();
        assert_eq!((room.width(), room.height()), (4, 3));
        assert!(!room.rotated());
    }

    #[test]
    fn test_reset_respects_rotation() {
        let mut room = Room::new("a", 4, 3, 20).unwrap();
        room.rotate();
        room.width += 2; // pretend expansion happened
        room.reset_to_original();
        assert_eq!(
            (room.width(), room.height()),
            (3, 4),
            "rotated room resets to swapped originals"
        );
    }

    #[test]
    fn test_expansion_used_accounts_for_rotation() {
        let mut room = Room::new("a", 4, 3, 20).unwrap();
        room.rotate(); // now 3×4
        room.width += 1;
        room.height += 2;
        assert_eq!(room.expansion_used(), 3);
    }

    #[test]
    fn test_bounds_absent_while_unplaced() {
        let room = Room::new("a", 4, 3, 20).unwrap();
        assert_eq!(room.bounds(), None);
        assert!(!room.is_placed());
    }

    #[test]
    fn test_shared_wall_vertical() {
        let a = placed("a", 0, 0, 4, 3);
        let b = placed("b", 4, 1, 2, 5); // left edge at a's right edge, spans overlap
        assert!(a.shares_wall_with(&b));
        assert!(b.shares_wall_with(&a), "shared wall is symmetric");
    }

    #[test]
    fn test_shared_wall_horizontal() {
        let a = placed("a", 0, 0, 4, 3);
        let b = placed("b", 2, 3, 4, 2); // bottom edge at a's top edge
        assert!(a.shares_wall_with(&b));
    }

    #[test]
    fn test_corner_touch_is_not_a_wall() {
        let a = placed("a", 0, 0, 4, 3);
        let b = placed("b", 4, 3, 2, 2); // touches only at (4, 3)
        assert!(!a.shares_wall_with(&b));
        assert!(!b.shares_wall_with(&a));
    }

    #[test]
    fn test_gap_is_not_a_wall() {
        let a = placed("a", 0, 0, 4, 3);
        let b = placed("b", 5, 0, 2, 3); // one-cell gap
        assert!(!a.shares_wall_with(&b));
    }

    #[test]
    fn test_unplaced_room_shares_no_wall() {
        let a = placed("a", 0, 0, 4, 3);
        let b = Room::new("b", 4, 3, 20).unwrap();
        assert!(!a.shares_wall_with(&b));
        assert!(!b.shares_wall_with(&a));
    }
}
