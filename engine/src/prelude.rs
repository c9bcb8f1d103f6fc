pub use crate::{
    affordable, Command, CurrencyLedger, Data, Destination, Inventory, ItemId,
    Msg, Outcome, Registry, Session, Settings, TravelPoint, ALL_CATEGORIES,
};
pub use util::{HashMap, HashSet, IndexMap, IndexSet, StrExt};
