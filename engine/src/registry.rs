//! Runtime collection of fast travel points.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    CurrencyLedger, Destination, Inventory, Notifier, SoundCue, TransferSignal,
    TravelPoint,
};

/// Category name that matches every discovered point.
pub const ALL_CATEGORIES: &str = "all";

/// Ordered set of travel points with unique names.
///
/// Point order is the order the points were first seeded in. Commands that
/// name a point that doesn't exist are ignored.
#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Registry {
    initialized: bool,
    points: Vec<TravelPoint>,
}

impl Registry {
    /// Merge configured points into the registry.
    ///
    /// Points whose names are already present are left alone, so saved
    /// changes survive re-seeding. With `reinitialize` or on first use, all
    /// existing points are dropped first.
    pub fn seed<'a>(
        &mut self,
        points: impl IntoIterator<Item = &'a TravelPoint>,
        reinitialize: bool,
    ) {
        if reinitialize || !self.initialized {
            self.points.clear();
            self.initialized = true;
        }

        let old_len = self.points.len();
        for p in points {
            if self.find(p.name()).is_none() {
                self.points.push(p.clone());
            }
        }

        log::info!(
            "Seeded fast travel registry, {} new points, {} total",
            self.points.len() - old_len,
            self.points.len()
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn find(&self, name: &str) -> Option<&TravelPoint> {
        self.points.iter().find(|p| p.name() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut TravelPoint> {
        let ret = self.points.iter_mut().find(|p| p.name() == name);
        if ret.is_none() {
            log::debug!("No fast travel point {name:?}, command ignored");
        }
        ret
    }

    /// Iterate all points, discovered or not.
    pub fn iter(&self) -> impl Iterator<Item = &TravelPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn discovered(&self) -> impl Iterator<Item = &TravelPoint> {
        self.points.iter().filter(|p| p.discovered)
    }

    pub fn discovered_count(&self) -> usize {
        self.discovered().count()
    }

    /// Discovered points in `category`, or all discovered points if
    /// category is `"all"`.
    pub fn by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a TravelPoint> + 'a {
        self.discovered()
            .filter(move |p| category == ALL_CATEGORIES || p.category == category)
    }

    /// Distinct categories of discovered points in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        self.discovered()
            .map(|p| p.category.as_str())
            .unique()
            .collect()
    }

    /// Set the discovered state of a point.
    ///
    /// When a hidden point becomes discovered, `notifier` is told about it
    /// if one is given.
    pub fn discover(
        &mut self,
        name: &str,
        discovered: bool,
        notifier: Option<&mut dyn Notifier>,
    ) {
        let Some(point) = self.find_mut(name) else {
            return;
        };

        let was_discovered = point.discovered;
        point.discovered = discovered;

        if discovered && !was_discovered {
            log::info!("Discovered fast travel point {name:?}");
            if let Some(notifier) = notifier {
                notifier.point_discovered(point.name(), point.toast_se.as_deref());
            }
        }
    }

    /// Change where a point takes the player.
    pub fn relocate(&mut self, name: &str, destination: Destination) {
        if let Some(point) = self.find_mut(name) {
            point.destination = destination;
        }
    }

    pub fn recategorize(&mut self, name: &str, category: &str) {
        if let Some(point) = self.find_mut(name) {
            point.category = category.to_owned();
        }
    }

    /// Pay for and perform a travel to the named point.
    ///
    /// Gold is deducted first, then items. The cost is not checked here,
    /// callers must only offer points that pass `affordable`. Returns
    /// whether the point existed and the travel happened.
    pub fn travel(
        &self,
        name: &str,
        purse: &mut (impl CurrencyLedger + Inventory + ?Sized),
        host: &mut (impl SoundCue + TransferSignal + ?Sized),
    ) -> bool {
        let Some(point) = self.find(name) else {
            log::debug!("No fast travel point {name:?}, travel ignored");
            return false;
        };

        if point.cost.gold > 0 {
            purse.lose_gold(point.cost.gold);
        }
        if point.cost.item_amount > 0 {
            purse.lose_item(point.cost.item, point.cost.item_amount);
        }

        if let Some(se) = &point.travel_se {
            host.play_se(se);
        }
        host.reserve_transfer(point.destination);

        log::info!("Fast travel to {name:?}, {:?}", point.destination);
        true
    }
}
