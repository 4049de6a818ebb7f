//! Difficulty levels and their search parameters.

use std::fmt;

use crate::search::SearchOptions;

/// An engine strength level from 1 (weakest) to 5 (strongest).
///
/// The level sets both the search depth and an evaluation-noise amplitude
/// applied at non-terminal leaves, so low levels are shallow *and*
/// erratic rather than just shallow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(1);
    pub const MAX: Difficulty = Difficulty(5);

    /// Create a difficulty, returning `None` outside 1..=5.
    pub fn new(level: u8) -> Option<Difficulty> {
        (1..=5).contains(&level).then_some(Difficulty(level))
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Search depth in plies.
    #[inline]
    pub fn depth(self) -> u32 {
        self.0 as u32
    }

    /// Leaf-noise amplitude in centipawns. Zero at full strength.
    pub fn noise(self) -> i32 {
        match self.0 {
            1 => 75,
            2 => 40,
            3 => 20,
            4 => 10,
            _ => 0,
        }
    }

    /// Search options for this level.
    pub fn options(self) -> SearchOptions {
        SearchOptions {
            depth: self.depth(),
            noise: self.noise(),
            ..SearchOptions::default()
        }
    }
}

impl Default for Difficulty {
    fn default() -> Difficulty {
        Difficulty(3)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.0)
    }
}
