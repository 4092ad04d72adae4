//! Round state machine
//!
//! A `GameSession` owns everything that changes during a playthrough: the
//! eight sampled countries, the round index, the shuffle animation cursor,
//! the results so far and the categories already used. State only moves
//! through `poll`, `select_category` and `reset`.
//!
//! ```text
//! Shuffling { cursor } --ticks run out--> Revealed
//! Revealed --select_category--> Resolved { result }
//! Resolved --feedback expires, advance delay--> Shuffling (next round)
//!                                            \-> SessionComplete (after round 8)
//! ```

use crate::config::TimingConfig;
use crate::data::CountryProvider;
use crate::game::rng::GameRng;
use crate::game::timer::TimerQueue;
use crate::models::{Category, Country, Feedback, RoundResult};
use crate::{GeoHunterError, Result, ROUNDS_PER_SESSION};
use log::{debug, error, info, trace};
use std::collections::{BTreeMap, HashSet};
use std::time::Instant;

/// Phase of the current round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundPhase {
    /// Reveal animation running; selections are ignored
    Shuffling { cursor: usize },
    /// True flag shown, waiting for a category
    Revealed,
    /// Category chosen for this round
    Resolved { result: RoundResult },
    /// All rounds played
    SessionComplete,
}

/// Notifications for the outer shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Fired once per session after the last feedback window closes
    Completed(Vec<RoundResult>),
    /// The next round could not be set up; the session is over
    Aborted(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundTimer {
    ShuffleTick,
    FeedbackExpired,
    Advance,
}

/// A flag placed into a category tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedFlag {
    pub flag: String,
    pub country: String,
    pub rank: u32,
}

/// One playthrough of eight rounds
pub struct GameSession {
    provider: Box<dyn CountryProvider>,
    rng: GameRng,
    timing: TimingConfig,
    countries: Vec<Country>,
    round: usize,
    phase: RoundPhase,
    shuffle: Vec<String>,
    results: Vec<RoundResult>,
    used: HashSet<Category>,
    feedback: Option<Feedback>,
    timers: TimerQueue<RoundTimer>,
}

impl GameSession {
    /// Sample a session and start round 0's shuffle
    pub fn new(
        provider: Box<dyn CountryProvider>,
        rng: GameRng,
        timing: TimingConfig,
        now: Instant,
    ) -> Result<Self> {
        let mut session = Self {
            provider,
            rng,
            timing,
            countries: Vec::new(),
            round: 0,
            phase: RoundPhase::SessionComplete,
            shuffle: Vec::new(),
            results: Vec::new(),
            used: HashSet::new(),
            feedback: None,
            timers: TimerQueue::new(),
        };
        session.reset(now)?;
        Ok(session)
    }

    /// Throw away all progress and start over with freshly sampled countries
    pub fn reset(&mut self, now: Instant) -> Result<()> {
        self.timers.invalidate();
        self.countries = self
            .provider
            .sample_countries(ROUNDS_PER_SESSION, &mut self.rng)?;
        self.round = 0;
        self.results.clear();
        self.used.clear();
        self.feedback = None;

        info!(
            "New session: {}",
            self.countries
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        self.start_round(now)
    }

    fn start_round(&mut self, now: Instant) -> Result<()> {
        self.timers.invalidate();
        let country = self.countries.get(self.round).ok_or_else(|| {
            GeoHunterError::DataError(format!("No country sampled for round {}", self.round + 1))
        })?;
        self.shuffle = self
            .provider
            .build_shuffle_sequence(country, &self.countries, &mut self.rng);
        self.phase = RoundPhase::Shuffling { cursor: 0 };
        self.timers
            .schedule(now, self.timing.shuffle_tick, RoundTimer::ShuffleTick);
        debug!("Round {} started", self.round + 1);
        Ok(())
    }

    /// Fire every timer due at `now`, in order.
    ///
    /// Follow-up timers are scheduled from the deadline that fired, so a late
    /// poll catches up instead of stretching the animation.
    pub fn poll(&mut self, now: Instant) -> Option<SessionEvent> {
        while let Some((due, timer)) = self.timers.pop_due(now) {
            if let Some(event) = self.fire(timer, due) {
                return Some(event);
            }
        }
        None
    }

    fn fire(&mut self, timer: RoundTimer, now: Instant) -> Option<SessionEvent> {
        match timer {
            RoundTimer::ShuffleTick => {
                if let RoundPhase::Shuffling { cursor } = self.phase {
                    let next = cursor + 1;
                    if next >= self.shuffle.len() {
                        trace!("Shuffle finished on round {}", self.round + 1);
                        self.phase = RoundPhase::Revealed;
                    } else {
                        trace!("Shuffle step {}", next);
                        self.phase = RoundPhase::Shuffling { cursor: next };
                        self.timers
                            .schedule(now, self.timing.shuffle_tick, RoundTimer::ShuffleTick);
                    }
                }
                None
            }
            RoundTimer::FeedbackExpired => {
                self.feedback = None;
                self.timers
                    .schedule(now, self.timing.advance_delay, RoundTimer::Advance);
                None
            }
            RoundTimer::Advance => self.advance(now),
        }
    }

    fn advance(&mut self, now: Instant) -> Option<SessionEvent> {
        if !matches!(self.phase, RoundPhase::Resolved { .. }) {
            return None;
        }

        if self.round + 1 >= ROUNDS_PER_SESSION {
            self.timers.invalidate();
            self.phase = RoundPhase::SessionComplete;
            info!("Session complete with {} points", self.score());
            return Some(SessionEvent::Completed(self.results.clone()));
        }

        self.round += 1;
        match self.start_round(now) {
            Ok(()) => None,
            Err(err) => {
                error!("Could not start round {}: {}", self.round + 1, err);
                self.timers.invalidate();
                self.phase = RoundPhase::SessionComplete;
                Some(SessionEvent::Aborted(err.to_string()))
            }
        }
    }

    /// Assign the revealed flag to a category.
    ///
    /// Returns the new result, or `None` when the input is ignored: still
    /// shuffling, round already resolved, session over, or category used.
    pub fn select_category(&mut self, category: Category, now: Instant) -> Option<&RoundResult> {
        if self.phase != RoundPhase::Revealed {
            debug!("Ignoring {} outside the reveal phase", category);
            return None;
        }
        if self.used.contains(&category) {
            debug!("Ignoring {}: already used this session", category);
            return None;
        }

        let country = self.countries.get(self.round)?;
        let result = RoundResult::score(country, category)?;

        debug!("{}", Feedback::from(&result));
        self.used.insert(category);
        self.feedback = Some(Feedback::from(&result));
        self.results.push(result.clone());
        self.phase = RoundPhase::Resolved { result };
        self.timers.schedule(
            now,
            self.timing.feedback_duration,
            RoundTimer::FeedbackExpired,
        );

        self.results.last()
    }

    /// Current phase
    pub fn phase(&self) -> &RoundPhase {
        &self.phase
    }

    /// Zero-based round index
    pub fn round_index(&self) -> usize {
        self.round
    }

    /// Countries sampled for this session, in round order
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Country on the current round's flag
    pub fn current_country(&self) -> Option<&Country> {
        self.countries.get(self.round)
    }

    /// Flag under the shuffle cursor, or the true flag once revealed
    pub fn current_flag(&self) -> Option<&str> {
        match &self.phase {
            RoundPhase::Shuffling { cursor } => self.shuffle.get(*cursor).map(String::as_str),
            _ => self.current_country().map(|c| c.flag_or_placeholder()),
        }
    }

    /// Shuffle sequence for the current round
    pub fn shuffle_sequence(&self) -> &[String] {
        &self.shuffle
    }

    pub fn is_shuffling(&self) -> bool {
        matches!(self.phase, RoundPhase::Shuffling { .. })
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RoundPhase::SessionComplete
    }

    /// Whether a category tile accepts input right now
    pub fn can_select(&self, category: Category) -> bool {
        self.phase == RoundPhase::Revealed && !self.used.contains(&category)
    }

    pub fn is_used(&self, category: Category) -> bool {
        self.used.contains(&category)
    }

    /// Results so far, in round order
    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    /// Running score
    pub fn score(&self) -> u32 {
        self.results.iter().map(|r| r.points).sum()
    }

    /// Active feedback banner, if one is showing
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Flags placed so far, keyed by category
    pub fn placed_flags(&self) -> BTreeMap<Category, PlacedFlag> {
        self.results
            .iter()
            .map(|r| {
                (
                    r.category,
                    PlacedFlag {
                        flag: r.flag.clone(),
                        country: r.country.clone(),
                        rank: r.rank,
                    },
                )
            })
            .collect()
    }

    /// Fraction of the session reached, counting the current round
    pub fn progress(&self) -> f64 {
        (self.round + 1) as f64 / ROUNDS_PER_SESSION as f64
    }

    /// Earliest pending timer, for the event loop's poll timeout
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_due()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BuiltinCountries;
    use crate::SHUFFLE_LENGTH;
    use std::time::Duration;

    fn session(now: Instant) -> GameSession {
        GameSession::new(
            Box::new(BuiltinCountries::new()),
            GameRng::seeded(3),
            TimingConfig::default(),
            now,
        )
        .unwrap()
    }

    fn reveal(session: &mut GameSession, now: &mut Instant) {
        let tick = TimingConfig::default().shuffle_tick;
        for _ in 0..SHUFFLE_LENGTH {
            *now += tick;
            session.poll(*now);
        }
        assert_eq!(*session.phase(), RoundPhase::Revealed);
    }

    #[test]
    fn test_starts_shuffling_round_zero() {
        let now = Instant::now();
        let session = session(now);
        assert_eq!(session.round_index(), 0);
        assert_eq!(*session.phase(), RoundPhase::Shuffling { cursor: 0 });
        assert_eq!(session.countries().len(), ROUNDS_PER_SESSION);
        assert!(session.results().is_empty());
        assert_eq!(
            session.next_deadline(),
            Some(now + Duration::from_millis(200))
        );
    }

    #[test]
    fn test_shuffle_advances_then_reveals_true_flag() {
        let mut now = Instant::now();
        let mut session = session(now);
        let tick = Duration::from_millis(200);

        now += tick;
        session.poll(now);
        assert_eq!(*session.phase(), RoundPhase::Shuffling { cursor: 1 });

        for _ in 1..SHUFFLE_LENGTH - 1 {
            now += tick;
            session.poll(now);
        }
        assert_eq!(
            *session.phase(),
            RoundPhase::Shuffling {
                cursor: SHUFFLE_LENGTH - 1
            }
        );

        now += tick;
        session.poll(now);
        assert_eq!(*session.phase(), RoundPhase::Revealed);
        let truth = session.current_country().unwrap().flag.clone();
        assert_eq!(session.current_flag(), Some(truth.as_str()));
        assert_eq!(session.next_deadline(), None);
    }

    #[test]
    fn test_late_poll_catches_up() {
        let now = Instant::now();
        let mut session = session(now);
        session.poll(now + Duration::from_secs(5));
        assert_eq!(*session.phase(), RoundPhase::Revealed);
    }

    #[test]
    fn test_selection_ignored_while_shuffling() {
        let now = Instant::now();
        let mut session = session(now);
        assert!(session.select_category(Category::Gdp, now).is_none());
        assert!(session.results().is_empty());
        assert_eq!(session.score(), 0);
        assert!(!session.is_used(Category::Gdp));
    }

    #[test]
    fn test_accepted_selection_scores_true_rank() {
        let mut now = Instant::now();
        let mut session = session(now);
        reveal(&mut session, &mut now);

        let expected = session
            .current_country()
            .unwrap()
            .rank(Category::Coffee)
            .unwrap();
        let result = session.select_category(Category::Coffee, now).cloned().unwrap();
        assert_eq!(result.points, expected);
        assert_eq!(session.score(), expected);
        assert!(session.is_used(Category::Coffee));
        assert_eq!(session.feedback().map(|f| f.points), Some(expected));
        assert!(matches!(session.phase(), RoundPhase::Resolved { .. }));
    }

    #[test]
    fn test_second_selection_same_round_ignored() {
        let mut now = Instant::now();
        let mut session = session(now);
        reveal(&mut session, &mut now);

        assert!(session.select_category(Category::Size, now).is_some());
        let score = session.score();
        assert!(session.select_category(Category::Gas, now).is_none());
        assert!(session.select_category(Category::Size, now).is_none());
        assert_eq!(session.results().len(), 1);
        assert_eq!(session.score(), score);
        assert!(!session.is_used(Category::Gas));
    }

    #[test]
    fn test_feedback_clears_then_round_advances() {
        let mut now = Instant::now();
        let mut session = session(now);
        reveal(&mut session, &mut now);
        session.select_category(Category::Tourism, now);

        now += Duration::from_millis(1999);
        session.poll(now);
        assert!(session.feedback().is_some());

        now += Duration::from_millis(1);
        session.poll(now);
        assert!(session.feedback().is_none());
        assert_eq!(session.round_index(), 0);

        now += Duration::from_millis(500);
        assert_eq!(session.poll(now), None);
        assert_eq!(session.round_index(), 1);
        assert_eq!(*session.phase(), RoundPhase::Shuffling { cursor: 0 });
        assert_eq!(session.results().len(), session.round_index());
    }

    #[test]
    fn test_used_category_rejected_next_round() {
        let mut now = Instant::now();
        let mut session = session(now);
        reveal(&mut session, &mut now);
        session.select_category(Category::Fifa, now);
        now += Duration::from_secs(3);
        session.poll(now);
        reveal(&mut session, &mut now);

        assert!(!session.can_select(Category::Fifa));
        assert!(session.select_category(Category::Fifa, now).is_none());
        assert!(session.can_select(Category::Crime));
        assert!(session.select_category(Category::Crime, now).is_some());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut now = Instant::now();
        let mut session = session(now);
        reveal(&mut session, &mut now);
        session.select_category(Category::Population, now);

        session.reset(now).unwrap();
        assert_eq!(session.round_index(), 0);
        assert!(session.results().is_empty());
        assert!(session.feedback().is_none());
        assert!(!session.is_used(Category::Population));
        assert_eq!(*session.phase(), RoundPhase::Shuffling { cursor: 0 });

        // the stale feedback timer from before the reset must not fire
        now += Duration::from_millis(200);
        session.poll(now);
        assert_eq!(*session.phase(), RoundPhase::Shuffling { cursor: 1 });
        assert_eq!(session.round_index(), 0);
    }

    #[test]
    fn test_placed_flags_track_results() {
        let mut now = Instant::now();
        let mut session = session(now);
        reveal(&mut session, &mut now);
        session.select_category(Category::Gas, now);

        let placed = session.placed_flags();
        let country = session.current_country().unwrap();
        let tile = placed.get(&Category::Gas).unwrap();
        assert_eq!(tile.country, country.name);
        assert_eq!(Some(tile.rank), country.rank(Category::Gas));
        assert_eq!(placed.len(), 1);
    }

    /// Hands out fewer countries than a session has rounds
    struct ShortSample(Vec<Country>);

    impl CountryProvider for ShortSample {
        fn countries(&self) -> &[Country] {
            &self.0
        }

        fn sample_countries(&self, _n: usize, _rng: &mut GameRng) -> Result<Vec<Country>> {
            Ok(self.0[..2].to_vec())
        }
    }

    #[test]
    fn test_round_that_cannot_start_ends_session() {
        let mut now = Instant::now();
        let pool = BuiltinCountries::new().countries().to_vec();
        let mut session = GameSession::new(
            Box::new(ShortSample(pool)),
            GameRng::seeded(3),
            TimingConfig::default(),
            now,
        )
        .unwrap();

        let mut events = Vec::new();
        for category in [Category::Population, Category::Fifa] {
            reveal(&mut session, &mut now);
            session.select_category(category, now);
            while let Some(deadline) = session.next_deadline() {
                now = deadline;
                if let Some(event) = session.poll(now) {
                    events.push(event);
                }
                if session.is_shuffling() || session.is_complete() {
                    break;
                }
            }
        }

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], SessionEvent::Aborted(_)));
        assert!(session.is_complete());
        assert_eq!(session.next_deadline(), None);
        assert!(session.select_category(Category::Gas, now).is_none());
    }
}
