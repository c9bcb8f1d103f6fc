use std::str::FromStr;

use anyhow::bail;
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use util::IndexMap;

/// Menu inputs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum InputAction {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
}

/// Mapping from key names to menu inputs.
#[derive(Clone, Debug, Deref, Eq, PartialEq, Serialize, Deserialize)]
pub struct InputMap(IndexMap<String, InputAction>);

impl Default for InputMap {
    fn default() -> Self {
        use InputAction::*;

        // NB. Order matters, first binding for an action is the main binding
        // that's reported by key_for.
        InputMap(
            [
                ("Up", Up),
                ("Down", Down),
                ("Left", Left),
                ("Right", Right),
                ("Ret", Confirm),
                ("Esc", Cancel),
                ("w", Up),
                ("s", Down),
                ("a", Left),
                ("d", Right),
                ("Sp", Confirm),
                ("z", Confirm),
                ("x", Cancel),
            ]
            .into_iter()
            .map(|(k, a)| (k.to_owned(), a))
            .collect(),
        )
    }
}

impl InputMap {
    /// Find the key for the given action.
    pub fn key_for(&self, action: InputAction) -> Option<&str> {
        self.0
            .iter()
            .find_map(|(k, v)| (*v == action).then_some(k.as_str()))
    }

    /// Look up the action for a key name.
    pub fn action(&self, key: &str) -> anyhow::Result<InputAction> {
        match self.0.get(key) {
            Some(a) => Ok(*a),
            None => key.parse(),
        }
    }
}

impl FromStr for InputAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use InputAction::*;
        Ok(match s.to_ascii_lowercase().as_str() {
            "up" => Up,
            "down" => Down,
            "left" => Left,
            "right" => Right,
            "ok" | "confirm" => Confirm,
            "cancel" => Cancel,
            _ => bail!("unknown key {s:?}"),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keys() {
        let map = InputMap::default();
        assert_eq!(map.key_for(InputAction::Confirm), Some("Ret"));
        assert_eq!(map.action("s").unwrap(), InputAction::Down);
        assert_eq!(map.action("Esc").unwrap(), InputAction::Cancel);
        assert_eq!(map.action("cancel").unwrap(), InputAction::Cancel);
        assert!(map.action("F13").is_err());
    }
}
