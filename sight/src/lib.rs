//! Distance, range and line-of-sight checks between actors on a tile map.
//!
//! Sight is blocked by region tags rather than by map geometry: an actor
//! sees along a line only as long as every cell on the line carries the same
//! region tag as the cell the actor stands on.

mod actor;
pub use actor::{Actor, ActorId, ActorLocator, Actors, Facing};

mod interpreter;
pub use interpreter::{Interpreter, SIGHT_CHECK_WAIT};

mod region;
pub use region::{RegionMap, TerrainRegionLookup};

mod sight;
pub use crate::sight::{
    distance, has_line_of_sight, in_cone, in_range, in_sight, sight_line,
    DEFAULT_SLOPE,
};
