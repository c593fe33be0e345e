//! Greedy post-placement expansion: rooms grow into leftover floor area.
//!
//! Each placed room tries the four directions in a randomly shuffled order
//! and grows one unit at a time until a direction is exhausted, then moves
//! to the next. Growth stops at the expansion budget, the footprint edge,
//! or another placed room. Rooms are processed in registration order, so an
//! earlier room's growth can consume space a later room would have taken —
//! an accepted nondeterminism of the heuristic.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::plan::{rect_overlaps_any, FloorPlan};

/// One axis-aligned growth direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
}

/// Expand every placed room within its budget. Unplaced rooms are skipped.
pub fn expand_rooms(plan: &mut FloorPlan, rng: &mut impl Rng) {
    for idx in 0..plan.rooms.len() {
        if !plan.rooms[idx].is_placed() {
            continue;
        }
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        for direction in directions {
            // Exhaust this direction before trying the next.
            while grow_one(plan, idx, direction) {}
        }
    }
}

/// Grow the room at `idx` by one unit in `direction` if legal, committing
/// the new geometry. Growing left or down shifts the origin so the opposite
/// edge stays fixed. Returns whether the unit was applied.
fn grow_one(plan: &mut FloorPlan, idx: usize, direction: Direction) -> bool {
    let room = &plan.rooms[idx];
    let (x, y) = match room.position() {
        Some(p) => p,
        None => return false,
    };
    if room.expansion_used() + 1 > room.max_expansion() {
        return false;
    }

    let (new_x, new_y, new_width, new_height) = match direction {
        Direction::Right => (x, y, room.width() + 1, room.height()),
        Direction::Left => (x - 1, y, room.width() + 1, room.height()),
        Direction::Up => (x, y, room.width(), room.height() + 1),
        Direction::Down => (x, y - 1, room.width(), room.height() + 1),
    };

    if !plan
        .footprint
        .contains_rect(new_x, new_y, new_width, new_height)
    {
        return false;
    }
    if rect_overlaps_any(&plan.rooms, Some(idx), new_x, new_y, new_width, new_height) {
        return false;
    }

    let room = &mut plan.rooms[idx];
    room.position = Some((new_x, new_y));
    room.width = new_width;
    room.height = new_height;
    true
}
