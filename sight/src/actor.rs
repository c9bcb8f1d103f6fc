use glam::{ivec2, IVec2};
use serde::{Deserialize, Serialize};
use util::IndexMap;

/// Reference to an actor on the current map as written in event scripts.
///
/// Scripts address actors with plain integers: `0` is the event running the
/// script, `-1` is the player, `-2`, `-3`, ... are the followers in party
/// order and positive values are map event ids.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ActorId {
    This,
    Player,
    Follower(usize),
    Event(u32),
}

impl From<i32> for ActorId {
    fn from(id: i32) -> Self {
        match id {
            0 => ActorId::This,
            -1 => ActorId::Player,
            n if n < -1 => ActorId::Follower((n.unsigned_abs() - 2) as usize),
            n => ActorId::Event(n as u32),
        }
    }
}

/// Facing direction, numbered like the keys on a numeric keypad.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Facing {
    Down = 2,
    Left = 4,
    Right = 6,
    Up = 8,
}

impl Facing {
    /// Convert an engine direction code, unknown codes give `None`.
    pub fn from_code(code: i32) -> Option<Facing> {
        match code {
            2 => Some(Facing::Down),
            4 => Some(Facing::Left),
            6 => Some(Facing::Right),
            8 => Some(Facing::Up),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Unit vector pointing in the facing direction, y grows downwards.
    pub fn to_vec(self) -> IVec2 {
        match self {
            Facing::Down => ivec2(0, 1),
            Facing::Left => ivec2(-1, 0),
            Facing::Right => ivec2(1, 0),
            Facing::Up => ivec2(0, -1),
        }
    }
}

/// Capability to find actors on the current map.
///
/// `ActorId::This` is resolved by the caller before queries reach the
/// locator, implementations may treat it as unknown.
pub trait ActorLocator {
    /// Map cell the actor stands on, `None` if there is no such actor.
    fn position(&self, id: ActorId) -> Option<IVec2>;

    /// Raw engine direction code the actor is facing. The code is not
    /// validated here, see `Facing::from_code`.
    fn direction(&self, id: ActorId) -> Option<i32>;
}

/// Position and facing of a single map actor.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Actor {
    pub pos: IVec2,
    pub direction: i32,
}

impl Actor {
    pub fn new(pos: impl Into<IVec2>, facing: Facing) -> Self {
        Actor {
            pos: pos.into(),
            direction: facing.code(),
        }
    }
}

/// Plain actor roster for a map, usable as an `ActorLocator`.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Actors {
    pub player: Option<Actor>,
    pub followers: Vec<Actor>,
    pub events: IndexMap<u32, Actor>,
}

impl Actors {
    fn get(&self, id: ActorId) -> Option<&Actor> {
        match id {
            ActorId::This => None,
            ActorId::Player => self.player.as_ref(),
            ActorId::Follower(i) => self.followers.get(i),
            ActorId::Event(n) => self.events.get(&n),
        }
    }
}

impl ActorLocator for Actors {
    fn position(&self, id: ActorId) -> Option<IVec2> {
        self.get(id).map(|a| a.pos)
    }

    fn direction(&self, id: ActorId) -> Option<i32> {
        self.get(id).map(|a| a.direction)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn script_ids() {
        assert_eq!(ActorId::from(0), ActorId::This);
        assert_eq!(ActorId::from(-1), ActorId::Player);
        assert_eq!(ActorId::from(-2), ActorId::Follower(0));
        assert_eq!(ActorId::from(-4), ActorId::Follower(2));
        assert_eq!(ActorId::from(7), ActorId::Event(7));
    }

    #[test]
    fn facing_codes() {
        for f in [Facing::Down, Facing::Left, Facing::Right, Facing::Up] {
            assert_eq!(Facing::from_code(f.code()), Some(f));
        }
        assert_eq!(Facing::from_code(0), None);
        assert_eq!(Facing::from_code(5), None);
    }

    #[test]
    fn roster_lookup() {
        let mut actors = Actors {
            player: Some(Actor::new([1, 2], Facing::Up)),
            followers: vec![Actor::new([1, 3], Facing::Left)],
            ..Default::default()
        };
        actors.events.insert(4, Actor::new([9, 9], Facing::Right));

        assert_eq!(actors.position(ActorId::Player), Some(ivec2(1, 2)));
        assert_eq!(actors.direction(ActorId::Follower(0)), Some(4));
        assert_eq!(actors.position(ActorId::Follower(1)), None);
        assert_eq!(actors.direction(ActorId::Event(4)), Some(6));
        assert_eq!(actors.position(ActorId::This), None);
    }
}
