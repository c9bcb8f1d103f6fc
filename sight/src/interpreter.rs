use glam::IVec2;

use crate::{ActorId, ActorLocator, TerrainRegionLookup, DEFAULT_SLOPE};

/// How many frames an event script pauses after each sight check.
///
/// Sight checks are usually polled from parallel event scripts, the pause
/// keeps a map full of watchful events from checking every frame.
pub const SIGHT_CHECK_WAIT: u32 = 10;

/// Sight queries as made from a running event script.
///
/// Actor ids are the script integers of `ActorId`, with `0` resolving to
/// the event that runs the script.
pub struct Interpreter<'a, L: ?Sized, R: ?Sized> {
    event_id: u32,
    locator: &'a L,
    regions: &'a R,
    wait: u32,
}

impl<'a, L, R> Interpreter<'a, L, R>
where
    L: ActorLocator + ?Sized,
    R: TerrainRegionLookup + ?Sized,
{
    pub fn new(event_id: u32, locator: &'a L, regions: &'a R) -> Self {
        Interpreter {
            event_id,
            locator,
            regions,
            wait: 0,
        }
    }

    fn resolve(&self, id: i32) -> ActorId {
        match ActorId::from(id) {
            ActorId::This => ActorId::Event(self.event_id),
            id => id,
        }
    }

    fn position(&self, id: i32) -> Option<IVec2> {
        let actor = self.resolve(id);
        let ret = self.locator.position(actor);
        if ret.is_none() {
            log::warn!("event {}: no actor {actor:?} on map", self.event_id);
        }
        ret
    }

    /// Distance between two actors, `None` if either can't be found.
    pub fn event_distance(&self, a: i32, b: i32) -> Option<i32> {
        Some(crate::distance(self.position(a)?, self.position(b)?))
    }

    /// Return whether actor `b` is within `range` of actor `a`.
    pub fn event_in_range(&self, a: i32, b: i32, range: i32) -> bool {
        self.event_distance(a, b).is_some_and(|d| d <= range)
    }

    /// Return whether actor `a` can see actor `b` within `range`.
    ///
    /// `slope` narrows or widens the view cone, `None` and zero both mean
    /// the default 45 degree cone. Every call queues a `SIGHT_CHECK_WAIT`
    /// pause for the script.
    pub fn event_in_sight(
        &mut self,
        a: i32,
        b: i32,
        range: i32,
        slope: Option<f64>,
    ) -> bool {
        self.wait += SIGHT_CHECK_WAIT;

        let slope = match slope {
            Some(s) if s != 0.0 && !s.is_nan() => s,
            _ => DEFAULT_SLOPE,
        };

        let (Some(pa), Some(pb)) = (self.position(a), self.position(b)) else {
            return false;
        };
        let Some(facing) = self.locator.direction(self.resolve(a)) else {
            return false;
        };

        crate::in_sight(self.regions, pa, facing, pb, range, slope)
    }

    /// Take the frames the script should pause for, resetting the counter.
    pub fn take_wait(&mut self) -> u32 {
        std::mem::take(&mut self.wait)
    }
}
