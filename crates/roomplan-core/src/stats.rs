//! Adjacency scoring and layout statistics.
//!
//! Read-only derivations over a plan: which declared pairs actually share a
//! wall, how much of the floor the placed rooms cover, and how far each
//! room grew past its original size.

use serde::{Deserialize, Serialize};

use crate::plan::FloorPlan;
use crate::room::Room;

/// Count the declared pairs whose rooms are both placed and share a wall.
/// Returns the score and the satisfied pairs in declaration order. Edges
/// with an unplaced endpoint are skipped, not penalized.
pub fn adjacency_score(plan: &FloorPlan) -> (usize, Vec<(String, String)>) {
    let mut score = 0;
    let mut satisfied = Vec::new();

    for (a, b) in plan.adjacency().edges() {
        let (room_a, room_b) = match (plan.room(a), plan.room(b)) {
            (Ok(ra), Ok(rb)) => (ra, rb),
            _ => continue,
        };
        if room_a.shares_wall_with(room_b) {
            score += 1;
            satisfied.push((a.to_string(), b.to_string()));
        }
    }
    (score, satisfied)
}

/// Point-in-time report over a plan's layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    /// Sum of region areas; overlapping regions are counted twice.
    pub total_area: i32,
    /// Sum of placed room areas.
    pub used_area: i32,
    /// `used / total × 100`, rounded to 2 decimal places.
    pub utilization_pct: f64,
    pub adjacency_score: usize,
    pub total_adjacencies: usize,
    /// `"score/total"`, e.g. `"2/3"`.
    pub adjacency_summary: String,
    pub adjacent_pairs: Vec<(String, String)>,
    /// One entry per placed room; unplaced rooms are omitted.
    pub rooms: Vec<RoomStats>,
}

/// Per-room placement and expansion summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStats {
    pub name: String,
    /// `"WxH"` as registered, before any rotation.
    pub original_size: String,
    /// `"WxH"` as placed.
    pub current_size: String,
    pub rotated: bool,
    /// Area growth over the original area, percent, 1 decimal place.
    pub expansion_pct: f64,
    /// Growth units consumed, summed across both axes.
    pub expansion_used: i32,
    pub max_expansion: i32,
    /// `"used/budget"`, e.g. `"3/15"`.
    pub expansion_summary: String,
}

/// Derive [`Statistics`] from the plan's current layout.
pub fn statistics(plan: &FloorPlan) -> Statistics {
    let total_area = plan.footprint().total_area();
    let used_area: i32 = plan
        .rooms()
        .iter()
        .filter(|r| r.is_placed())
        .map(Room::area)
        .sum();
    let utilization_pct = if total_area > 0 {
        round2(used_area as f64 / total_area as f64 * 100.0)
    } else {
        0.0
    };

    let (score, adjacent_pairs) = adjacency_score(plan);
    let total_adjacencies = plan.adjacency().edge_count();

    let rooms = plan
        .rooms()
        .iter()
        .filter(|r| r.is_placed())
        .map(|room| {
            let original_area = room.original_width() * room.original_height();
            let expansion_pct = if original_area > 0 {
                round1((room.area() - original_area) as f64 / original_area as f64 * 100.0)
            } else {
                0.0
            };
            RoomStats {
                name: room.name().to_string(),
                original_size: format!("{}x{}", room.original_width(), room.original_height()),
                current_size: format!("{}x{}", room.width(), room.height()),
                rotated: room.rotated(),
                expansion_pct,
                expansion_used: room.expansion_used(),
                max_expansion: room.max_expansion(),
                expansion_summary: format!("{}/{}", room.expansion_used(), room.max_expansion()),
            }
        })
        .collect();

    Statistics {
        total_area,
        used_area,
        utilization_pct,
        adjacency_score: score,
        total_adjacencies,
        adjacency_summary: format!("{}/{}", score, total_adjacencies),
        adjacent_pairs,
        rooms,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::Region;

    fn make_plan() -> FloorPlan {
        let mut plan = FloorPlan::new(vec![Region {
            x: 0,
            y: 0,
            width: 9,
            height: 5,
        }])
        .unwrap();
        plan.add_room("a", 4, 3, 20).unwrap();
        plan.add_room("b", 2, 3, 10).unwrap();
        plan.add_room("c", 2, 2, 5).unwrap();
        plan.add_adjacency("a", "b");
        plan.add_adjacency("b", "c");
        plan
    }

    fn place_at(plan: &mut FloorPlan, name: &str, x: i32, y: i32) {
        let idx = plan.room_index[name];
        plan.rooms[idx].position = Some((x, y));
    }

    #[test]
    fn test_score_counts_only_shared_walls() {
        let mut plan = make_plan();
        place_at(&mut plan, "a", 0, 0); // 4x3 at origin
        place_at(&mut plan, "b", 4, 0); // touches a's right wall
        place_at(&mut plan, "c", 7, 3); // corner contact with b only

        let (score, satisfied) = adjacency_score(&plan);
        assert_eq!(score, 1);
        assert_eq!(satisfied, vec![("a".to_string(), "b".to_string())]);
    }

    #[test]
    fn test_score_skips_unplaced_endpoints() {
        let mut plan = make_plan();
        place_at(&mut plan, "a", 0, 0);
        // b and c stay unplaced: both edges are skipped, not failed.
        let (score, satisfied) = adjacency_score(&plan);
        assert_eq!(score, 0);
        assert!(satisfied.is_empty());
    }

    #[test]
    fn test_statistics_utilization_and_summary() {
        let mut plan = make_plan();
        place_at(&mut plan, "a", 0, 0);
        place_at(&mut plan, "b", 4, 0);
        // c unplaced: excluded from used area and the per-room list.

        let stats = statistics(&plan);
        assert_eq!(stats.total_area, 45);
        assert_eq!(stats.used_area, 12 + 6);
        assert_eq!(stats.utilization_pct, 40.0, "18/45 = 40%");
        assert_eq!(stats.adjacency_score, 1);
        assert_eq!(stats.total_adjacencies, 2);
        assert_eq!(stats.adjacency_summary, "1/2");
        assert_eq!(stats.rooms.len(), 2);
    }

    #[test]
    fn test_utilization_rounds_to_two_decimals() {
        let mut plan = make_plan();
        place_at(&mut plan, "c", 0, 0); // 4 of 45 cells
        let stats = statistics(&plan);
        assert_eq!(stats.utilization_pct, 8.89, "4/45 = 8.888...%");
    }

    #[test]
    fn test_room_stats_track_expansion() {
        let mut plan = make_plan();
        place_at(&mut plan, "a", 0, 0);
        // Simulate one unit of rightward growth.
        plan.rooms[0].width += 1;

        let stats = statistics(&plan);
        let a = &stats.rooms[0];
        assert_eq!(a.name, "a");
        assert_eq!(a.original_size, "4x3");
        assert_eq!(a.current_size, "5x3");
        assert!(!a.rotated);
        assert_eq!(a.expansion_used, 1);
        assert_eq!(a.expansion_summary, "1/20");
        assert_eq!(a.expansion_pct, 25.0, "area 12 -> 15 is +25%");
    }

    #[test]
    fn test_room_stats_report_rotation_against_unswapped_original() {
        let mut plan = make_plan();
        plan.rooms[1].rotate(); // b becomes 3x2
        place_at(&mut plan, "b", 0, 0);

        let stats = statistics(&plan);
        let b = &stats.rooms[0];
        assert_eq!(b.original_size, "2x3", "original is never swapped");
        assert_eq!(b.current_size, "3x2");
        assert!(b.rotated);
        assert_eq!(b.expansion_used, 0);
    }

    #[test]
    fn test_statistics_with_nothing_placed() {
        let plan = make_plan();
        let stats = statistics(&plan);
        assert_eq!(stats.used_area, 0);
        assert_eq!(stats.utilization_pct, 0.0);
        assert!(stats.rooms.is_empty());
        assert_eq!(stats.adjacency_summary, "0/2");
    }

    #[test]
    fn test_statistics_serialize() {
        let mut plan = make_plan();
        place_at(&mut plan, "a", 0, 0);
        let json = serde_json::to_string(&statistics(&plan)).unwrap();
        assert!(json.contains("\"adjacency_summary\":\"0/2\""));
        assert!(json.contains("\"expansion_summary\":\"0/20\""));
    }
}
