use std::{collections::BTreeMap, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use util::{IndexMap, _String};

use crate::{Cost, Destination, ItemId, TravelPoint};

/// Static game data.
///
/// Loaded from an IDM data directory, see `Data::load`.
#[derive(Clone, Default, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Data {
    pub settings: Settings,
    /// Display names of inventory items.
    pub items: BTreeMap<ItemId, String>,
    /// Fast travel points in menu order.
    pub fast_travel_points: IndexMap<_String, PointSpec>,
}

impl Data {
    /// Load game data from an IDM file or a directory of IDM files.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Data> {
        let path = path.as_ref();
        let text = util::directory_to_idm(path)?;
        let data: Data = idm::from_str(&text)
            .with_context(|| format!("parsing game data {}", path.display()))?;
        log::info!(
            "Loaded game data from {}, {} fast travel points",
            path.display(),
            data.fast_travel_points.len()
        );
        Ok(data)
    }

    /// Runtime travel points built from the configuration.
    pub fn travel_points(&self) -> Vec<TravelPoint> {
        self.fast_travel_points
            .iter()
            .map(|(name, spec)| spec.to_point(name))
            .collect()
    }

    pub fn item_name(&self, item: ItemId) -> &str {
        self.items.get(&item).map_or("???", |s| s.as_str())
    }
}

/// Alignment of list entry text.
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Fast travel menu settings.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Show a category bar above the point list.
    pub show_categories: bool,
    /// Show the cost panel.
    pub use_costs: bool,
    /// Heading of the cost panel.
    pub cost_text: String,
    /// Cost panel text for points without a cost.
    pub free_text: String,
    /// Height of the cost panel in lines.
    pub cost_window_lines: u32,
    pub list_alignment: Alignment,
    /// Send a toast when a point is discovered.
    pub show_discover_toast: bool,
    /// Heading of the discovery toast.
    pub toast_text: String,
    pub currency_unit: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            show_categories: false,
            use_costs: true,
            cost_text: r"\c[1]Costs:\c[0]".into(),
            free_text: "None".into(),
            cost_window_lines: 3,
            list_alignment: Alignment::Left,
            show_discover_toast: true,
            toast_text: r"\c[1]Fast Travel Unlocked:\c[0]".into(),
            currency_unit: "G".into(),
        }
    }
}

/// Configuration entry for a single fast travel point.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PointSpec {
    pub discovered: bool,
    pub description: String,
    pub category: String,
    pub image: String,
    pub map: i32,
    pub x: i32,
    pub y: i32,
    pub direction: i32,
    pub gold_cost: i32,
    pub item_cost_item: ItemId,
    pub item_cost_amount: i32,
    pub travel_se: String,
    pub toast_se: String,
}

impl Default for PointSpec {
    fn default() -> Self {
        PointSpec {
            discovered: true,
            description: Default::default(),
            category: Default::default(),
            image: Default::default(),
            map: 0,
            x: 0,
            y: 0,
            // Facing down.
            direction: 2,
            gold_cost: 0,
            item_cost_item: 0,
            item_cost_amount: 0,
            travel_se: Default::default(),
            toast_se: Default::default(),
        }
    }
}

impl PointSpec {
    pub fn to_point(&self, name: &str) -> TravelPoint {
        fn sound(s: &str) -> Option<String> {
            (!s.trim().is_empty()).then(|| s.trim().to_owned())
        }

        let mut ret = TravelPoint::new(
            name,
            Destination::new(self.map, self.x, self.y, self.direction),
        );
        ret.discovered = self.discovered;
        ret.description = self.description.clone();
        ret.category = self.category.clone();
        ret.image = self.image.clone();
        ret.cost = Cost {
            gold: self.gold_cost,
            item: self.item_cost_item,
            item_amount: self.item_cost_amount,
        };
        ret.travel_se = sound(&self.travel_se);
        ret.toast_se = sound(&self.toast_se);
        ret
    }
}
