use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EngineState {
    #[default]
    Idle,
    Running,
}

impl EngineState {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// What a timer tick did to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick arrived while no round was running.
    Ignored,
    Ticked,
    /// The countdown ran out. Carries the rank the final score earned, if any.
    Ended { rank: Option<usize> },
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// The whack-a-mole state machine.
///
/// Owns the board, score, countdown, difficulty and high-score list. The
/// scheduler, score store and sound cue are injected so the whole round can be
/// driven without a browser.
pub struct GameEngine<S: Scheduler, P: ScoreStore, A: SoundCue> {
    board: Board,
    score: u32,
    time_left: u32,
    difficulty: Difficulty,
    state: EngineState,
    high_scores: HighScores,
    rng: SmallRng,
    scheduler: S,
    store: P,
    cue: A,
    countdown_timer: Option<S::Handle>,
    reveal_timer: Option<S::Handle>,
}

impl<S: Scheduler, P: ScoreStore, A: SoundCue> GameEngine<S, P, A> {
    pub fn new(scheduler: S, store: P, cue: A, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new(&mut rng);
        let mut engine = Self {
            board,
            score: 0,
            time_left: ROUND_SECS,
            difficulty: Difficulty::default(),
            state: EngineState::Idle,
            high_scores: HighScores::new(),
            rng,
            scheduler,
            store,
            cue,
            countdown_timer: None,
            reveal_timer: None,
        };
        engine.initialize();
        engine
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn slots(&self) -> &[Slot] {
        self.board.slots()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Puts the board and counters back to their pre-round values and reloads
    /// the stored high scores.
    ///
    /// Does nothing while a round is running, the live timers would keep
    /// ticking against the fresh board.
    pub fn initialize(&mut self) {
        if self.state.is_running() {
            log::debug!("initialize ignored, round in progress");
            return;
        }
        self.board.reset(&mut self.rng);
        self.score = 0;
        self.time_left = ROUND_SECS;
        self.high_scores = self.store.load();
        log::debug!("initialized, {} stored high scores", self.high_scores.len());
    }

    pub fn start(&mut self) -> Result<()> {
        if self.state.is_running() {
            return Err(GameError::AlreadyRunning);
        }

        self.cue.play_startup();
        self.initialize();
        self.state = EngineState::Running;

        let reveal_period = self.difficulty.reveal_period_ms();
        self.countdown_timer = Some(self.scheduler.schedule(TimerTask::Countdown, COUNTDOWN_PERIOD_MS));
        self.reveal_timer = Some(self.scheduler.schedule(TimerTask::Reveal, reveal_period));
        log::debug!(
            "round started on {} ({} ms reveal period)",
            self.difficulty.name(),
            reveal_period
        );
        Ok(())
    }

    pub fn on_timer(&mut self, task: TimerTask) -> TickOutcome {
        if !self.state.is_running() {
            log::trace!("stale {:?} tick ignored", task);
            return TickOutcome::Ignored;
        }

        match task {
            TimerTask::Countdown => self.tick_countdown(),
            TimerTask::Reveal => self.tick_reveal(),
        }
    }

    fn tick_countdown(&mut self) -> TickOutcome {
        if self.time_left <= 1 {
            self.time_left = 0;
            let rank = self.end();
            TickOutcome::Ended { rank }
        } else {
            self.time_left -= 1;
            TickOutcome::Ticked
        }
    }

    fn tick_reveal(&mut self) -> TickOutcome {
        let hidden = self.board.hide_some(&mut self.rng);
        let revealed = self.board.reveal_one(&mut self.rng);
        log::trace!("reveal tick: {} ducked, popped {:?}", hidden, revealed);
        TickOutcome::Ticked
    }

    pub fn whack(&mut self, position: usize) -> Result<WhackOutcome> {
        let position = self.board.validate_position(position)?;
        if !self.state.is_running() {
            return Ok(WhackOutcome::Miss);
        }

        let outcome = self.board.whack(position)?;
        if outcome == WhackOutcome::Hit {
            self.score += 1;
            log::trace!("hit at {}, score {}", position, self.score);
        }
        Ok(outcome)
    }

    /// Stops the round and records its score.
    ///
    /// Returns the rank the score earned on the high-score list. Does nothing
    /// when no round is running.
    pub fn end(&mut self) -> Option<usize> {
        if !self.state.is_running() {
            return None;
        }

        self.state = EngineState::Idle;
        self.cancel_timers();

        let rank = self.high_scores.record(self.score);
        if let Err(err) = self.store.save(&self.high_scores) {
            log::warn!("{}", err);
        }
        log::debug!("round ended with score {} (rank {:?})", self.score, rank);
        rank
    }

    /// Takes effect on the next [`start`](Self::start).
    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            log::debug!("difficulty set to {}", difficulty.name());
        }
        self.difficulty = difficulty;
    }

    /// Cancels any live timers without recording a score.
    pub fn teardown(&mut self) {
        if self.countdown_timer.is_some() || self.reveal_timer.is_some() {
            log::debug!("tearing down with live timers");
        }
        self.cancel_timers();
        self.state = EngineState::Idle;
    }

    fn cancel_timers(&mut self) {
        if let Some(handle) = self.countdown_timer.take() {
            self.scheduler.cancel(handle);
        }
        if let Some(handle) = self.reveal_timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<P: ScoreStore, A: SoundCue> GameEngine<ManualScheduler, P, A> {
    /// Delivers every tick due up to `deadline_ms`, returning how many were delivered.
    pub fn advance_to(&mut self, deadline_ms: u64) -> usize {
        let mut delivered = 0;
        while let Some(task) = self.scheduler.pop_due(deadline_ms) {
            self.on_timer(task);
            delivered += 1;
        }
        delivered
    }
}

impl<S: Scheduler, P: ScoreStore, A: SoundCue> Drop for GameEngine<S, P, A> {
    fn drop(&mut self) {
        self.teardown();
    }
}
