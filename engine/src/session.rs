use std::{collections::BTreeMap, sync::Arc};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    affordable_for, Command, CurrencyLedger, Data, Inventory, ItemId, Notifier,
    Outbox, Receiver, Registry, TravelPoint,
};

/// The party's money and items.
#[derive(Clone, Default, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Party {
    pub gold: i32,
    pub items: BTreeMap<ItemId, i32>,
}

impl Party {
    pub fn gain_item(&mut self, item: ItemId, amount: i32) {
        let n = self.items.entry(item).or_default();
        *n = (*n + amount).max(0);
        if *n == 0 {
            self.items.remove(&item);
        }
    }
}

impl CurrencyLedger for Party {
    fn gold(&self) -> i32 {
        self.gold
    }

    fn lose_gold(&mut self, amount: i32) {
        self.gold = (self.gold - amount).max(0);
    }
}

impl Inventory for Party {
    fn num_items(&self, item: ItemId) -> i32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    fn lose_item(&mut self, item: ItemId, amount: i32) {
        self.gain_item(item, -amount);
    }
}

/// What the host should do after a command.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    /// Nothing to do beyond handling messages.
    Done,
    /// Open the fast travel menu with these categories.
    OpenScene(Vec<String>),
}

/// Single game session state.
///
/// Owns the party purse and the fast travel registry. The purse and registry
/// are saved, the static game data is supplied again on load.
#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    #[serde(skip)]
    data: Arc<Data>,
    pub party: Party,
    registry: Registry,
    #[serde(skip)]
    outbox: Outbox,
}

impl Session {
    pub fn new(data: Arc<Data>) -> Self {
        let mut ret = Session {
            data,
            ..Default::default()
        };
        ret.reseed(false);
        ret
    }

    /// Restore a session from a `save` blob.
    ///
    /// Points added to the game data after the save was made are merged in.
    pub fn load(data: Arc<Data>, save: &[u8]) -> anyhow::Result<Self> {
        let json = snap::raw::Decoder::new()
            .decompress_vec(save)
            .context("decompressing save")?;
        let mut ret: Session =
            serde_json::from_slice(&json).context("parsing save")?;
        ret.data = data;
        ret.reseed(false);
        log::info!(
            "Loaded session, {} / {} fast travel points discovered",
            ret.registry.discovered_count(),
            ret.registry.len()
        );
        Ok(ret)
    }

    pub fn save(&self) -> anyhow::Result<Vec<u8>> {
        let json = serde_json::to_vec(self).context("serializing save")?;
        Ok(snap::raw::Encoder::new().compress_vec(&json)?)
    }

    fn reseed(&mut self, reinitialize: bool) {
        let points = self.data.travel_points();
        self.registry.seed(&points, reinitialize);
    }

    /// Start receiving the session's messages.
    pub fn subscribe(&mut self) -> Receiver {
        self.outbox.subscribe()
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Return whether the party can pay for travel to the point.
    pub fn can_afford(&self, point: &TravelPoint) -> bool {
        affordable_for(point, &self.party)
    }

    /// Run a fast travel command.
    pub fn apply(&mut self, cmd: &Command) -> Outcome {
        log::debug!("Command: {cmd}");

        match cmd {
            Command::CallScene(categories) => {
                return Outcome::OpenScene(categories.clone());
            }
            Command::Reinitialize => self.reseed(true),
            Command::Discover { name, discovered } => {
                let notifier = if self.data.settings.show_discover_toast {
                    Some(&mut self.outbox as &mut dyn Notifier)
                } else {
                    None
                };
                self.registry.discover(name, *discovered, notifier);
            }
            Command::ChangeMap { name, destination } => {
                self.registry.relocate(name, *destination);
            }
            Command::ChangeCategory { name, category } => {
                self.registry.recategorize(name, category);
            }
            Command::Travel(name) => {
                self.registry.travel(name, &mut self.party, &mut self.outbox);
            }
        }

        Outcome::Done
    }
}
