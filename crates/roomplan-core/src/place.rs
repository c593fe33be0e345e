//! Restart-based randomized placement search.
//!
//! Each attempt resets every room to its original size, pre-rotates each on
//! a fair coin flip, then places rooms largest-first by drawing uniform
//! anchor positions inside the footprint's regions. A room that fits
//! nowhere is rotated once and retried; if it still fits nowhere the
//! attempt aborts. Complete attempts are scored by satisfied adjacencies
//! and the best one is kept, with an early exit once every declared
//! adjacency is satisfied.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::expand::expand_rooms;
use crate::footprint::Footprint;
use crate::plan::{rect_overlaps_any, FloorPlan};
use crate::room::Room;
use crate::stats::adjacency_score;

/// Uniform draws tried per region before moving to the next region.
const DRAWS_PER_REGION: u32 = 100;

/// Knobs for one placement search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceOptions {
    /// Full reset-and-retry cycles before giving up.
    pub max_attempts: u32,
    /// Run the greedy expansion pass on every complete attempt.
    pub enable_expansion: bool,
    /// Stop as soon as an attempt satisfies every declared adjacency.
    pub stop_on_perfect: bool,
}

impl Default for PlaceOptions {
    fn default() -> Self {
        Self {
            max_attempts: 1000,
            enable_expansion: true,
            stop_on_perfect: true,
        }
    }
}

/// Outcome of a successful placement search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    /// Attempts executed, including the one that produced the kept layout.
    pub attempts_used: u32,
    /// Satisfied adjacencies in the kept layout.
    pub score: usize,
    /// Declared adjacencies, satisfied or not.
    pub total_edges: usize,
    /// The satisfied pairs themselves, in declaration order.
    pub satisfied: Vec<(String, String)>,
}

/// Geometry of one room inside a saved attempt. Only the fields the search
/// mutates are kept; name and budget are constants of the room set.
#[derive(Debug, Clone)]
struct SavedRoom {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    rotated: bool,
}

struct BestAttempt {
    score: usize,
    satisfied: Vec<(String, String)>,
    layout: Vec<SavedRoom>,
}

/// Search for an overlap-free, footprint-respecting position and rotation
/// for every room, maximizing satisfied adjacencies within the attempt
/// budget. On success the plan's rooms hold the best layout found. On
/// [`Error::PlacementFailed`] the rooms keep whatever the final attempt
/// left behind; callers must treat their positions as undefined.
pub fn place_rooms(
    plan: &mut FloorPlan,
    options: &PlaceOptions,
    rng: &mut impl Rng,
) -> Result<PlacementReport> {
    // Largest rooms are hardest to fit late, so they go first. The sort is
    // stable: equal areas keep registration order. Rotation never changes
    // area, so original dimensions decide the order for every attempt.
    let mut order: Vec<usize> = (0..plan.rooms.len()).collect();
    order.sort_by_key(|&i| {
        let room = &plan.rooms[i];
        std::cmp::Reverse(room.original_width() * room.original_height())
    });

    let total_edges = plan.adjacency.edge_count();
    let mut best: Option<BestAttempt> = None;
    let mut attempts_used = 0;

    for attempt in 1..=options.max_attempts {
        attempts_used = attempt;

        for room in &mut plan.rooms {
            room.position = None;
            room.reset_to_original();
            if rng.gen_bool(0.5) {
                room.rotate();
            }
        }

        let mut all_placed = true;
        for &idx in &order {
            if try_place(&plan.footprint, &mut plan.rooms, idx, rng) {
                continue;
            }
            // Other orientation, same region scan.
            plan.rooms[idx].rotate();
            if !try_place(&plan.footprint, &mut plan.rooms, idx, rng) {
                all_placed = false;
                break;
            }
        }
        if !all_placed {
            continue;
        }

        if options.enable_expansion {
            expand_rooms(plan, rng);
        }

        let (score, satisfied) = adjacency_score(plan);
        // The first complete attempt is always kept; after that only a
        // strictly better score replaces the snapshot.
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(BestAttempt {
                score,
                satisfied,
                layout: save_layout(&plan.rooms),
            });
        }
        if options.stop_on_perfect && score == total_edges {
            break;
        }
    }

    match best {
        Some(b) => {
            restore_layout(&mut plan.rooms, &b.layout);
            Ok(PlacementReport {
                attempts_used,
                score: b.score,
                total_edges,
                satisfied: b.satisfied,
            })
        }
        None => Err(Error::PlacementFailed {
            attempts: options.max_attempts,
        }),
    }
}

/// Scan regions in declared order and try up to [`DRAWS_PER_REGION`]
/// uniform anchor draws in each region large enough for the room's current
/// dimensions. The first non-overlapping draw places the room; a drawn
/// rectangle always lies inside its region, so no footprint check is
/// needed here.
fn try_place(footprint: &Footprint, rooms: &mut [Room], idx: usize, rng: &mut impl Rng) -> bool {
    let width = rooms[idx].width();
    let height = rooms[idx].height();

    for region in footprint.regions() {
        if region.width < width || region.height < height {
            continue;
        }
        let max_x = region.x + region.width - width;
        let max_y = region.y + region.height - height;

        for _ in 0..DRAWS_PER_REGION {
            let x = rng.gen_range(region.x..=max_x);
            let y = rng.gen_range(region.y..=max_y);
            if !rect_overlaps_any(rooms, Some(idx), x, y, width, height) {
                rooms[idx].position = Some((x, y));
                return true;
            }
        }
    }
    false
}

fn save_layout(rooms: &[Room]) -> Vec<SavedRoom> {
    rooms
        .iter()
        .map(|room| {
            // Only complete attempts are saved, so every room is placed.
            let (x, y) = room.position().unwrap_or((0, 0));
            SavedRoom {
                x,
                y,
                width: room.width(),
                height: room.height(),
                rotated: room.rotated(),
            }
        })
        .collect()
}

fn restore_layout(rooms: &mut [Room], layout: &[SavedRoom]) {
    for (room, saved) in rooms.iter_mut().zip(layout) {
        room.position = Some((saved.x, saved.y));
        room.width = saved.width;
        room.height = saved.height;
        room.rotated = saved.rotated;
    }
}
