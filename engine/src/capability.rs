//! Narrow interfaces to the parts of the host game the registry touches.

use crate::{Destination, ItemId};

/// The party's money.
pub trait CurrencyLedger {
    fn gold(&self) -> i32;

    fn lose_gold(&mut self, amount: i32);
}

/// The party's item stock.
pub trait Inventory {
    fn num_items(&self, item: ItemId) -> i32;

    fn lose_item(&mut self, item: ItemId, amount: i32);
}

/// Moves the player to another map.
pub trait TransferSignal {
    fn reserve_transfer(&mut self, destination: Destination);
}

/// Plays sound effects by name.
pub trait SoundCue {
    fn play_se(&mut self, name: &str);
}

/// Receives discovery notifications.
pub trait Notifier {
    fn point_discovered(&mut self, name: &str, se: Option<&str>);
}
