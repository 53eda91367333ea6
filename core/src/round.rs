use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    Memorizing,
    Solving,
    Solved,
    TimedOut,
}

impl RoundPhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Solved | Self::TimedOut)
    }

    /// Whether unrevealed target colors are hidden from the player in this phase.
    pub const fn is_concealed(self) -> bool {
        !matches!(self, Self::Memorizing)
    }
}

/// Consecutive solves without a timeout. Lives only as long as the play session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    count: u32,
}

impl Streak {
    /// Every tenth solve in a row levels up.
    pub const LEVEL_UP_EVERY: u32 = 10;

    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Records a solve, returning whether it completed a level.
    pub fn record_solve(&mut self) -> bool {
        self.count = self.count.saturating_add(1);
        self.count % Self::LEVEL_UP_EVERY == 0
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTimings {
    memorize: Duration,
    solve: Duration,
}

impl PhaseTimings {
    pub const DEFAULT_MEMORIZE: Duration = Duration::from_millis(2500);
    pub const DEFAULT_SOLVE: Duration = Duration::from_secs(12);
    pub const MIN_SOLVE: Duration = Duration::from_secs(5);
    pub const MAX_SOLVE: Duration = Duration::from_secs(60);

    pub fn new(memorize: Duration, solve: Duration) -> Self {
        Self::default().with_memorize(memorize).with_solve(solve)
    }

    pub const fn memorize(&self) -> Duration {
        self.memorize
    }

    pub const fn solve(&self) -> Duration {
        self.solve
    }

    pub fn with_memorize(self, memorize: Duration) -> Self {
        Self { memorize, ..self }
    }

    /// Solve time is adjustable by the player within 5 to 60 seconds.
    pub fn with_solve(self, solve: Duration) -> Self {
        let clamped = solve.clamp(Self::MIN_SOLVE, Self::MAX_SOLVE);
        if clamped != solve {
            log::warn!("Solve duration {:?} clamped to {:?}", solve, clamped);
        }
        Self {
            solve: clamped,
            ..self
        }
    }
}

impl Default for PhaseTimings {
    fn default() -> Self {
        Self {
            memorize: Self::DEFAULT_MEMORIZE,
            solve: Self::DEFAULT_SOLVE,
        }
    }
}

/// Deadline the host has to schedule. The engine never waits on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTimer {
    pub phase: RoundPhase,
    pub duration: Duration,
}

/// Memory-match play session: the carried-over grid settings and the streak.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSession {
    config: GridConfig,
    timings: PhaseTimings,
    streak: Streak,
}

impl MatchSession {
    pub fn new(config: GridConfig, timings: PhaseTimings) -> Self {
        Self {
            config,
            timings,
            streak: Streak::default(),
        }
    }

    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.grid_config(), PhaseTimings::default())
    }

    pub const fn config(&self) -> GridConfig {
        self.config
    }

    pub const fn timings(&self) -> PhaseTimings {
        self.timings
    }

    pub const fn streak(&self) -> Streak {
        self.streak
    }

    pub fn set_target_count(&mut self, target_count: CellCount) {
        self.config = self.config.with_target_count(target_count);
    }

    pub fn set_solve_duration(&mut self, solve: Duration) {
        self.timings = self.timings.with_solve(solve);
    }

    /// Generates the next board from the current settings. The round starts memorizing.
    pub fn new_round(
        &self,
        generator: &impl BoardGenerator,
        rng: &mut dyn RandomSource,
    ) -> MemoryRound {
        MemoryRound::new(generator.generate(self.config, rng))
    }

    fn record_solve(&mut self) -> PlaceOutcome {
        if self.streak.record_solve() {
            let next = self.config.target_count().saturating_add(1);
            self.config = self.config.with_target_count(next);
            log::debug!(
                "Level up at streak {}, next round has {} targets",
                self.streak.count(),
                self.config.target_count()
            );
            PlaceOutcome::LevelUp
        } else {
            PlaceOutcome::Solved
        }
    }
}

/// One memorize/solve round over a single board.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MemoryRound {
    board: Board,
    phase: RoundPhase,
}

impl MemoryRound {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            phase: RoundPhase::Memorizing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    pub fn start_memorize_phase(&self, duration: Duration) -> PhaseTimer {
        PhaseTimer {
            phase: RoundPhase::Memorizing,
            duration,
        }
    }

    pub fn start_solve_phase(&self, duration: Duration) -> PhaseTimer {
        PhaseTimer {
            phase: RoundPhase::Solving,
            duration,
        }
    }

    /// Hides every unrevealed target and deals the palette. Called by the host when memorizing time is up.
    pub fn conceal_all(&mut self, rng: &mut dyn RandomSource) -> Result<()> {
        match self.phase {
            RoundPhase::Memorizing => {
                log::debug!("Concealing {} targets", self.board.target_count());
                self.phase = RoundPhase::Solving;
            }
            RoundPhase::Solving => {}
            RoundPhase::Solved | RoundPhase::TimedOut => return Err(GameError::WrongPhase),
        }
        self.board.rebuild_palette(rng);
        Ok(())
    }

    pub fn try_place(
        &mut self,
        session: &mut MatchSession,
        index: CellIndex,
        color: ColorId,
    ) -> Result<PlaceOutcome> {
        let index = self.board.validate_index(index)?;
        match self.phase {
            RoundPhase::Solving | RoundPhase::Solved => {}
            RoundPhase::Memorizing | RoundPhase::TimedOut => return Err(GameError::WrongPhase),
        }

        let outcome = self.board.reveal(index, color)?;
        if outcome == PlaceOutcome::Accepted && self.board.is_solved() {
            self.phase = RoundPhase::Solved;
            return Ok(session.record_solve());
        }
        Ok(outcome)
    }

    /// Called by the host when solving time is up. Only a round in the solve phase can time out.
    pub fn on_timeout(&mut self, session: &mut MatchSession) -> TimeoutOutcome {
        match self.phase {
            RoundPhase::Memorizing | RoundPhase::Solved | RoundPhase::TimedOut => TimeoutOutcome::NoChange,
            RoundPhase::Solving => {
                log::debug!(
                    "Round timed out with {} targets left, streak was {}",
                    self.board.pending_count(),
                    session.streak.count()
                );
                self.phase = RoundPhase::TimedOut;
                session.streak.reset();
                TimeoutOutcome::TimedOut
            }
        }
    }
}
