//! Footprint geometry: the occupiable floor as a union of rectangles.
//!
//! Pure containment queries over immutable region data. Region bounds are
//! half-open: a region covers the unit cells `[x, x+width) × [y, y+height)`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One axis-aligned rectangle contributing floor area. Regions may overlap
/// or be disjoint; their union is the occupiable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn area(&self) -> i32 {
        self.width * self.height
    }

    fn contains_point(&self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.x + self.width && self.y <= y && y < self.y + self.height
    }

    /// Whole rectangle inside this single region.
    fn contains_rect(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        self.x <= x
            && x + width <= self.x + self.width
            && self.y <= y
            && y + height <= self.y + self.height
    }
}

/// An ordered list of regions defining the floor. Immutable after
/// construction; all placement queries run against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    regions: Vec<Region>,
}

impl Footprint {
    /// Build a footprint from explicit region records. Fails on an empty
    /// list or any region with a non-positive dimension.
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        if regions.is_empty() {
            return Err(Error::EmptyFootprint);
        }
        for (index, r) in regions.iter().enumerate() {
            if r.width <= 0 || r.height <= 0 {
                return Err(Error::InvalidRegion {
                    index,
                    width: r.width,
                    height: r.height,
                });
            }
        }
        Ok(Footprint { regions })
    }

    /// Build a footprint from a bottom-to-top stack of `(width, height)`
    /// strips, each anchored at x = 0 with y offsets accumulated from the
    /// strips below it.
    pub fn from_stacked_strips(strips: &[(i32, i32)]) -> Result<Self> {
        let mut regions = Vec::with_capacity(strips.len());
        let mut y_offset = 0;
        for &(width, height) in strips {
            regions.push(Region {
                x: 0,
                y: y_offset,
                width,
                height,
            });
            y_offset += height;
        }
        Footprint::new(regions)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Overall bounding width: `max(region.x + region.width)`.
    pub fn bounding_width(&self) -> i32 {
        self.regions.iter().map(|r| r.x + r.width).max().unwrap_or(0)
    }

    /// Overall bounding height: `max(region.y + region.height)`.
    pub fn bounding_height(&self) -> i32 {
        self.regions.iter().map(|r| r.y + r.height).max().unwrap_or(0)
    }

    /// Sum of region areas. Overlapping regions are counted twice; regions
    /// are declared, not deduplicated.
    pub fn total_area(&self) -> i32 {
        self.regions.iter().map(Region::area).sum()
    }

    /// True if the unit cell at (x, y) lies inside any region.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.regions.iter().any(|r| r.contains_point(x, y))
    }

    /// True iff every unit cell of the `width × height` rectangle anchored
    /// at (x, y) is covered by at least one region. A rectangle may straddle
    /// regions as long as each cell is covered.
    pub fn contains_rect(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        if width <= 0 || height <= 0 {
            return true; // no cells to cover
        }
        // Fast path: fully inside one region.
        if self
            .regions
            .iter()
            .any(|r| r.contains_rect(x, y, width, height))
        {
            return true;
        }
        // Straddling case: check every cell.
        for dx in 0..width {
            for dy in 0..height {
                if !self.contains_point(x + dx, y + dy) {
                    return false;
                }
            }
        }
        true
    }
}
