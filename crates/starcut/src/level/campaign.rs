//! Level progression: load, restart, advance.

use super::{generate_level, DifficultyPolicy, Level, LevelCfg, LevelError};
use crate::geom2::rand::ReplayToken;
use crate::moves::{Game, MoveCfg};

/// Walks a policy level by level from one seed.
///
/// Level `n` always uses `ReplayToken { seed, index: n }`, so restarting a
/// level reproduces it exactly and advancing is independent of play history.
#[derive(Clone, Debug)]
pub struct Campaign<P> {
    policy: P,
    board_size: (f64, f64),
    cfg: LevelCfg,
    seed: u64,
    current: Level,
}

impl<P: DifficultyPolicy> Campaign<P> {
    pub fn new(
        policy: P,
        board_size: (f64, f64),
        cfg: LevelCfg,
        seed: u64,
        start_level: u32,
    ) -> Result<Self, LevelError> {
        let current = generate_level(
            board_size,
            &policy,
            start_level,
            &cfg,
            ReplayToken::new(seed, start_level as u64),
        )?;
        Ok(Self {
            policy,
            board_size,
            cfg,
            seed,
            current,
        })
    }

    #[inline]
    pub fn current(&self) -> &Level {
        &self.current
    }

    #[inline]
    pub fn level_index(&self) -> u32 {
        self.current.index
    }

    /// Fresh play session on the current level.
    pub fn game(&self, cfg: MoveCfg) -> Game {
        Game::new(self.current.clone(), cfg)
    }

    /// Regenerate the current level; same token, same layout.
    pub fn restart(&mut self) -> Result<&Level, LevelError> {
        self.load(self.current.index)
    }

    /// Move on to the next level.
    pub fn advance(&mut self) -> Result<&Level, LevelError> {
        self.load(self.current.index.saturating_add(1))
    }

    fn load(&mut self, index: u32) -> Result<&Level, LevelError> {
        self.current = generate_level(
            self.board_size,
            &self.policy,
            index,
            &self.cfg,
            ReplayToken::new(self.seed, index as u64),
        )?;
        Ok(&self.current)
    }
}
