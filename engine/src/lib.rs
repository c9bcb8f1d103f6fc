//! Fast travel game logic.
//!
//! The `Registry` holds the fast travel points of a game session and is
//! changed through named `Command`s. Effects on the rest of the game go
//! through the capability traits in this crate, so the registry itself
//! doesn't know about the party or the map.

mod capability;
pub use capability::{
    CurrencyLedger, Inventory, Notifier, SoundCue, TransferSignal,
};

mod command;
pub use command::Command;

mod data;
pub use data::{Alignment, Data, PointSpec, Settings};

mod msg;
pub use msg::{Msg, Outbox, Receiver};

mod point;
pub use point::{
    affordable, affordable_for, Cost, Destination, ItemId, TravelPoint,
};

pub mod prelude;

mod registry;
pub use registry::{Registry, ALL_CATEGORIES};

mod session;
pub use session::{Outcome, Party, Session};
