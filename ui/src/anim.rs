//! Character and battler animation timing.

/// Frames between character walk pattern steps at a given move speed.
///
/// Faster movers step their animation faster, speed 4 (normal) waits 10
/// frames.
pub fn animation_wait(real_move_speed: i32) -> i32 {
    (9 - real_move_speed) * 2
}

/// A battler motion row on the sprite sheet.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Motion {
    pub name: &'static str,
    /// Row index on the battler sheet.
    pub index: u32,
    /// Whether the motion repeats until replaced.
    pub looping: bool,
}

const fn motion(name: &'static str, index: u32, looping: bool) -> Motion {
    Motion {
        name,
        index,
        looping,
    }
}

/// Standard battler motions.
///
/// Dead and thrust play once and hold the last frame.
pub const MOTIONS: [Motion; 18] = [
    motion("walk", 0, true),
    motion("wait", 1, true),
    motion("chant", 2, true),
    motion("guard", 3, true),
    motion("damage", 4, false),
    motion("evade", 5, false),
    motion("thrust", 6, false),
    motion("swing", 7, false),
    motion("missile", 8, false),
    motion("skill", 9, false),
    motion("spell", 10, false),
    motion("item", 11, false),
    motion("escape", 12, true),
    motion("victory", 13, true),
    motion("dying", 14, true),
    motion("abnormal", 15, true),
    motion("sleep", 16, true),
    motion("dead", 17, false),
];

pub fn find_motion(name: &str) -> Option<&'static Motion> {
    MOTIONS.iter().find(|m| m.name == name)
}

/// Walking animation state of a map character.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Stepper {
    count: usize,
    pattern: u32,
}

impl Default for Stepper {
    fn default() -> Self {
        // Characters start at the middle frame, standing still.
        Stepper {
            count: 0,
            pattern: 1,
        }
    }
}

impl Stepper {
    /// Advance by `n_updates` frames, return whether the pattern changed.
    pub fn update(&mut self, n_updates: u32, real_move_speed: i32) -> bool {
        let wait = animation_wait(real_move_speed).max(1) as usize;
        let mut changed = false;
        for _ in 0..n_updates {
            self.count += 1;
            if self.count >= wait {
                self.count = 0;
                self.pattern = (self.pattern + 1) % 4;
                changed = true;
            }
        }
        changed
    }

    /// Sprite sheet column to draw, the four step cycle uses three
    /// columns.
    pub fn pattern(&self) -> u32 {
        if self.pattern < 3 {
            self.pattern
        } else {
            1
        }
    }
}
