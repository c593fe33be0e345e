//! The floor plan: one footprint, its rooms, and the declared adjacencies.
//!
//! A `FloorPlan` is a plain owned value. Callers that need several layouts
//! at once construct several plans; nothing in the crate is global.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::adjacency::AdjacencyGraph;
use crate::error::{Error, Result};
use crate::footprint::{Footprint, Region};
use crate::room::Room;

#[derive(Debug, Clone)]
pub struct FloorPlan {
    pub(crate) footprint: Footprint,
    pub(crate) rooms: Vec<Room>,
    pub(crate) room_index: HashMap<String, usize>,
    pub(crate) adjacency: AdjacencyGraph,
}

impl FloorPlan {
    /// Build a plan over the given footprint regions.
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        Ok(FloorPlan {
            footprint: Footprint::new(regions)?,
            rooms: Vec::new(),
            room_index: HashMap::new(),
            adjacency: AdjacencyGraph::new(),
        })
    }

    /// Build a plan over a bottom-to-top stack of `(width, height)` strips.
    pub fn from_stacked_strips(strips: &[(i32, i32)]) -> Result<Self> {
        Ok(FloorPlan {
            footprint: Footprint::from_stacked_strips(strips)?,
            rooms: Vec::new(),
            room_index: HashMap::new(),
            adjacency: AdjacencyGraph::new(),
        })
    }

    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// Register a room. Names are unique; dimensions must be positive and
    /// the expansion budget non-negative.
    pub fn add_room(
        &mut self,
        name: impl Into<String>,
        width: i32,
        height: i32,
        max_expansion: i32,
    ) -> Result<()> {
        let name = name.into();
        if self.room_index.contains_key(&name) {
            return Err(Error::DuplicateRoom(name));
        }
        let room = Room::new(name, width, height, max_expansion)?;
        self.room_index
            .insert(room.name().to_string(), self.rooms.len());
        self.adjacency.add_node(room.name());
        self.rooms.push(room);
        Ok(())
    }

    /// Declare that two registered rooms should share a wall. Unknown names
    /// and repeated pairs are silent no-ops returning `false`.
    pub fn add_adjacency(&mut self, a: &str, b: &str) -> bool {
        self.adjacency.add_edge(a, b)
    }

    pub fn adjacency(&self) -> &AdjacencyGraph {
        &self.adjacency
    }

    /// Rooms in registration order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up a room by name.
    pub fn room(&self, name: &str) -> Result<&Room> {
        self.room_index
            .get(name)
            .map(|&i| &self.rooms[i])
            .ok_or_else(|| Error::RoomNotFound(name.to_string()))
    }

    /// True iff the rectangle intersects the placed rectangle of any room
    /// other than `candidate`. Touching edges do not count as overlap.
    pub fn overlaps(&self, candidate: &Room, x: i32, y: i32, width: i32, height: i32) -> bool {
        let skip = self.room_index.get(candidate.name()).copied();
        rect_overlaps_any(&self.rooms, skip, x, y, width, height)
    }

    /// Current layout plus declared adjacencies, for reporting or external
    /// rendering. Pure read; calling it twice without intervening mutation
    /// returns identical data.
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            regions: self.footprint.regions().to_vec(),
            bounding_width: self.footprint.bounding_width(),
            bounding_height: self.footprint.bounding_height(),
            rooms: self
                .rooms
                .iter()
                .map(|room| {
                    let (x, y) = match room.position() {
                        Some((x, y)) => (Some(x), Some(y)),
                        None => (None, None),
                    };
                    RoomSnapshot {
                        name: room.name().to_string(),
                        x,
                        y,
                        width: room.width(),
                        height: room.height(),
                        rotated: room.rotated(),
                        placed: room.is_placed(),
                        area: room.area(),
                        max_expansion: room.max_expansion(),
                    }
                })
                .collect(),
            adjacencies: self
                .adjacency
                .edges()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }
}

/// Strict 2-D interval overlap of the rectangle against every placed room
/// except the one at `skip`. Free function so the search can test against
/// the room list while mutating individual rooms.
pub(crate) fn rect_overlaps_any(
    rooms: &[Room],
    skip: Option<usize>,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> bool {
    rooms.iter().enumerate().any(|(i, other)| {
        if Some(i) == skip {
            return false;
        }
        let (ox, oy) = match other.position() {
            Some(p) => p,
            None => return false,
        };
        x < ox + other.width() && x + width > ox && y < oy + other.height() && y + height > oy
    })
}

/// Serializable picture of a plan at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub regions: Vec<Region>,
    pub bounding_width: i32,
    pub bounding_height: i32,
    pub rooms: Vec<RoomSnapshot>,
    pub adjacencies: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub name: String,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: i32,
    pub height: i32,
    pub rotated: bool,
    pub placed: bool,
    pub area: i32,
    pub max_expansion: i32,
}
