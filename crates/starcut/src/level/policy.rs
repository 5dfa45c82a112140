//! Difficulty policies: map a level index to generation parameters.

/// Parameters for one generated level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelParams {
    pub division_lines: usize,
    pub star_count: usize,
    pub junk_count: usize,
    pub move_budget: u32,
}

/// Source of per-level parameters.
pub trait DifficultyPolicy {
    fn params(&self, level: u32) -> LevelParams;
}

#[inline]
fn stars_for(level: u32) -> usize {
    ((1.0 + level as f64 * 0.14).floor() as usize).max(1)
}

#[inline]
fn junk_for(level: u32) -> usize {
    ((2.0 + level as f64 * 0.23).floor() as usize).max(2)
}

#[inline]
fn moves_for(level: u32) -> u32 {
    ((3.0 + level as f64 * 0.15).floor() as u32).max(3)
}

/// Hundred-level progression: objects grow faster than the move budget.
///
/// | level | stars | junk | moves |
/// |-------|-------|------|-------|
/// | 1     | 1     | 2    | 3     |
/// | 20    | 3     | 6    | 6     |
/// | 100   | 15    | 25   | 18    |
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardPolicy;

impl DifficultyPolicy for StandardPolicy {
    fn params(&self, level: u32) -> LevelParams {
        let move_budget = moves_for(level);
        LevelParams {
            division_lines: (1 + level as usize / 10).min(move_budget as usize),
            star_count: stars_for(level),
            junk_count: junk_for(level),
            move_budget,
        }
    }
}

/// Endless mode: standard layouts with an effectively unlimited move budget.
#[derive(Clone, Copy, Debug)]
pub struct EndlessPolicy {
    pub move_budget: u32,
}

impl Default for EndlessPolicy {
    fn default() -> Self {
        Self { move_budget: 999 }
    }
}

impl DifficultyPolicy for EndlessPolicy {
    fn params(&self, level: u32) -> LevelParams {
        LevelParams {
            move_budget: self.move_budget,
            ..StandardPolicy.params(level)
        }
    }
}
