//! Error taxonomy for the placement engine.
//!
//! Construction problems (bad footprint, bad room definition) are rejected
//! before they are applied. An exhausted placement search is reported as
//! [`Error::PlacementFailed`] so callers can retry with a larger attempt
//! budget; it is an expected outcome, not a crash.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A footprint needs at least one region.
    #[error("footprint has no regions")]
    EmptyFootprint,

    /// A region was declared with a non-positive dimension.
    #[error("region {index} has invalid dimensions {width}x{height} (both must be positive)")]
    InvalidRegion { index: usize, width: i32, height: i32 },

    /// A room with this name is already registered.
    #[error("room '{0}' is already registered")]
    DuplicateRoom(String),

    /// Room dimensions must be positive and the expansion budget non-negative.
    #[error(
        "room '{name}' has invalid definition: {width}x{height}, max_expansion {max_expansion}"
    )]
    InvalidDimensions {
        name: String,
        width: i32,
        height: i32,
        max_expansion: i32,
    },

    /// A lookup referenced a room name that was never registered.
    #[error("unknown room '{0}'")]
    RoomNotFound(String),

    /// No attempt managed to place every room. Room positions are undefined
    /// after this error; callers must not read them.
    #[error("no valid placement found after {attempts} attempts")]
    PlacementFailed { attempts: u32 },
}
