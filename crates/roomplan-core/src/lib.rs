//! roomplan-core - Floor-Plan Placement Engine
//!
//! Lays out named rectangular rooms inside an irregular floor footprint (a
//! union of axis-aligned regions) so that rooms do not overlap, stay fully
//! inside the footprint, and satisfy as many declared adjacency constraints
//! (pairs of rooms that should share a wall) as a bounded random search can
//! manage. Placed rooms may then grow greedily into leftover floor area
//! within per-room expansion budgets.
//!
//! # Architecture
//!
//! - [`Footprint`](footprint::Footprint): union-of-rectangles floor with
//!   half-open containment queries
//! - [`Room`](room::Room): mutable rectangle with rotation, position, and
//!   an expansion budget
//! - [`FloorPlan`](plan::FloorPlan): one footprint plus its rooms and
//!   declared adjacencies - a plain owned value, one per layout
//! - [`place_rooms`](place::place_rooms): restart-based random search that
//!   keeps the best-scoring complete attempt
//! - [`expand_rooms`](expand::expand_rooms): greedy directional growth pass
//! - [`statistics`](stats::statistics): utilization and adjacency reporting
//!
//! All randomness flows through an injected [`rand::Rng`], so a seeded rng
//! reproduces a run exactly.
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use roomplan_core::prelude::*;
//!
//! # fn main() -> roomplan_core::Result<()> {
//! let mut plan = FloorPlan::from_stacked_strips(&[(12, 8), (18, 6)])?;
//! plan.add_room("living", 4, 3, 15)?;
//! plan.add_room("kitchen", 3, 2, 10)?;
//! plan.add_adjacency("living", "kitchen");
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let report = place_rooms(&mut plan, &PlaceOptions::default(), &mut rng)?;
//! println!(
//!     "placed in {} attempts, adjacency score {}/{}",
//!     report.attempts_used, report.score, report.total_edges
//! );
//! # Ok(())
//! # }
//! ```

pub mod adjacency;
pub mod error;
pub mod expand;
pub mod footprint;
pub mod place;
pub mod plan;
pub mod room;
pub mod stats;

pub use error::{Error, Result};

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::adjacency::AdjacencyGraph;
    pub use crate::error::{Error, Result};
    pub use crate::expand::expand_rooms;
    pub use crate::footprint::{Footprint, Region};
    pub use crate::place::{place_rooms, PlaceOptions, PlacementReport};
    pub use crate::plan::{FloorPlan, LayoutSnapshot, RoomSnapshot};
    pub use crate::room::Room;
    pub use crate::stats::{adjacency_score, statistics, RoomStats, Statistics};
}
