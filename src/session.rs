//! Live game state for the level currently being played, and the
//! transitions that drive it. One `apply_move` is a whole turn: validate
//! and commit the player's step, give every pursuer its BFS step, then
//! check the terminal conditions.

use tracing::{debug, trace};

use crate::error::InvalidLevelIndex;
use crate::grid::{Dir, Grid, Pos};
use crate::level::Level;
use crate::pursuit::next_step_toward;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

/// A play-through of an ordered level list. Owns the levels and the mutable
/// run-time state; the grid itself is never touched.
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    levels: Vec<Level>,
    level_index: usize,
    player: Pos,
    pursuers: Vec<Pos>,
    phase: Phase,
}

impl Session {
    /// Starts a fresh session on `levels[index]`.
    pub fn new(levels: Vec<Level>, index: usize) -> Result<Self, InvalidLevelIndex> {
        if index >= levels.len() {
            return Err(InvalidLevelIndex {
                index,
                count: levels.len(),
            });
        }
        let mut session = Self {
            levels,
            level_index: index,
            player: Pos::new(0, 0),
            pursuers: Vec::new(),
            phase: Phase::Playing,
        };
        session.reset();
        debug!(level = index, "session started");
        Ok(session)
    }

    /// One turn. Moves into walls or off the grid are rejected without any
    /// state change; after a win or loss this is a no-op until `reset` or
    /// `advance_level`.
    pub fn apply_move(&mut self, dir: Dir) {
        if self.phase != Phase::Playing {
            return;
        }
        let level = &self.levels[self.level_index];
        let candidate = match self.player.offset(dir) {
            Some(pos) if level.grid().is_open(pos) => pos,
            _ => {
                trace!(?dir, player = %self.player, "move rejected");
                return;
            }
        };

        self.player = candidate;
        for pursuer in &mut self.pursuers {
            *pursuer = next_step_toward(level.grid(), *pursuer, candidate);
        }

        // Loss is checked first: a pursuer landing on the finish cell
        // together with the player still catches the player.
        if self.pursuers.contains(&self.player) {
            self.phase = Phase::Lost;
            debug!(level = self.level_index, player = %self.player, "caught");
        } else if self.player == level.finish() {
            self.phase = Phase::Won;
            debug!(level = self.level_index, "level won");
        }
    }

    /// Puts the player and every pursuer back on their start cells and
    /// returns to `Playing`. Valid from any state.
    pub fn reset(&mut self) {
        let level = &self.levels[self.level_index];
        self.player = level.player_start();
        self.pursuers = level.pursuer_starts().to_vec();
        self.phase = Phase::Playing;
        trace!(level = self.level_index, "reset");
    }

    /// Moves on to the next level after a win. A no-op unless the current
    /// level is won and a next level exists.
    pub fn advance_level(&mut self) {
        if self.phase != Phase::Won || self.level_index + 1 >= self.levels.len() {
            return;
        }
        self.level_index += 1;
        debug!(level = self.level_index, "advancing level");
        self.reset();
    }

    pub fn level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    pub fn grid(&self) -> &Grid {
        self.level().grid()
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn pursuers(&self) -> &[Pos] {
        &self.pursuers
    }

    pub fn finish(&self) -> Pos {
        self.level().finish()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn won(&self) -> bool {
        self.phase == Phase::Won
    }

    pub fn lost(&self) -> bool {
        self.phase == Phase::Lost
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
