use glam::IVec2;
use serde::{Deserialize, Serialize};
use util::{HashMap, StrExt};

/// Capability to read the region tag of a map cell.
pub trait TerrainRegionLookup {
    fn region_id(&self, pos: IVec2) -> i32;
}

impl<F: Fn(IVec2) -> i32> TerrainRegionLookup for F {
    fn region_id(&self, pos: IVec2) -> i32 {
        self(pos)
    }
}

/// Sparse map of region tags, cells that were never set have region 0.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct RegionMap(HashMap<IVec2, i32>);

impl RegionMap {
    /// Build a region map from a character grid.
    ///
    /// Digits set the region tag of their cell, any other non-whitespace
    /// character leaves the cell at region 0.
    ///
    /// ```
    /// use sight::{RegionMap, TerrainRegionLookup};
    ///
    /// let map = RegionMap::from_text("
    ///     ..1
    ///     .2.");
    /// assert_eq!(map.region_id([2, 0].into()), 1);
    /// assert_eq!(map.region_id([1, 1].into()), 2);
    /// assert_eq!(map.region_id([0, 0].into()), 0);
    /// ```
    pub fn from_text(text: &str) -> Self {
        let mut ret = RegionMap::default();
        for (p, c) in text.char_grid() {
            if let Some(n) = c.to_digit(10) {
                ret.set(p, n as i32);
            }
        }
        ret
    }

    pub fn set(&mut self, pos: IVec2, region: i32) {
        if region == 0 {
            self.0.remove(&pos);
        } else {
            self.0.insert(pos, region);
        }
    }
}

impl TerrainRegionLookup for RegionMap {
    fn region_id(&self, pos: IVec2) -> i32 {
        self.0.get(&pos).copied().unwrap_or(0)
    }
}
