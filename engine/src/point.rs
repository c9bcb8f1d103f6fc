//! Fast travel point data

use serde::{Deserialize, Serialize};

use crate::{CurrencyLedger, Inventory};

/// Database id of an inventory item.
pub type ItemId = u32;

/// Where the player ends up after travelling to a point.
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub struct Destination {
    pub map_id: i32,
    pub x: i32,
    pub y: i32,
    /// Engine direction code the player faces on arrival.
    pub direction: i32,
}

impl Destination {
    pub fn new(map_id: i32, x: i32, y: i32, direction: i32) -> Self {
        Destination {
            map_id,
            x,
            y,
            direction,
        }
    }
}

/// Price of using a travel point.
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(default, rename_all = "kebab-case")]
pub struct Cost {
    pub gold: i32,
    pub item: ItemId,
    pub item_amount: i32,
}

impl Cost {
    pub fn has_cost(&self) -> bool {
        self.gold > 0 || self.item_amount > 0
    }

    pub fn is_free(&self) -> bool {
        !self.has_cost()
    }

    /// Return whether a party with `gold` money and `num_items` items can
    /// pay this cost.
    pub fn is_affordable(
        &self,
        gold: i32,
        num_items: impl FnOnce(ItemId) -> i32,
    ) -> bool {
        self.is_free()
            || (gold >= self.gold
                && (self.item_amount <= 0 || num_items(self.item) >= self.item_amount))
    }
}

/// A named fast travel destination.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TravelPoint {
    name: String,
    pub discovered: bool,
    pub description: String,
    pub image: String,
    pub category: String,
    pub destination: Destination,
    pub cost: Cost,
    /// Sound effect played when travelling.
    pub travel_se: Option<String>,
    /// Sound effect played with the discovery toast.
    pub toast_se: Option<String>,
}

impl TravelPoint {
    pub fn new(name: impl Into<String>, destination: Destination) -> Self {
        TravelPoint {
            name: name.into(),
            discovered: true,
            description: Default::default(),
            image: Default::default(),
            category: Default::default(),
            destination,
            cost: Default::default(),
            travel_se: None,
            toast_se: None,
        }
    }

    /// Unique identifier of the point, fixed at creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_cost(&self) -> bool {
        self.cost.has_cost()
    }
}

/// Return whether the point's cost can be paid from the given purse.
pub fn affordable(
    point: &TravelPoint,
    gold: i32,
    num_items: impl FnOnce(ItemId) -> i32,
) -> bool {
    point.cost.is_affordable(gold, num_items)
}

/// Affordability check against live party capabilities.
pub fn affordable_for(
    point: &TravelPoint,
    purse: &(impl CurrencyLedger + Inventory + ?Sized),
) -> bool {
    affordable(point, purse.gold(), |item| purse.num_items(item))
}
