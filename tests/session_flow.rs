//! Integration tests for a full eight-round session

use geohunter::config::TimingConfig;
use geohunter::data::{BuiltinCountries, CountryProvider, JsonCountries};
use geohunter::game::{GameOutcome, GameRng, GameSession, RoundPhase, SessionEvent, Tier};
use geohunter::models::{Category, Country};
use geohunter::{ROUNDS_PER_SESSION, SHUFFLE_LENGTH};
use std::collections::HashSet;
use std::io::Write;
use std::time::{Duration, Instant};

fn new_session(seed: u64, now: Instant) -> GameSession {
    GameSession::new(
        Box::new(BuiltinCountries::new()),
        GameRng::seeded(seed),
        TimingConfig::default(),
        now,
    )
    .expect("built-in table has enough countries")
}

/// Fire timers until the session waits for input, collecting events
fn settle(session: &mut GameSession, mut now: Instant, events: &mut Vec<SessionEvent>) -> Instant {
    while let Some(deadline) = session.next_deadline() {
        now = deadline;
        if let Some(event) = session.poll(now) {
            events.push(event);
        }
    }
    now
}

fn play_through(seed: u64) -> (GameSession, Vec<SessionEvent>) {
    let mut now = Instant::now();
    let mut session = new_session(seed, now);
    let mut events = Vec::new();

    for round in 0..ROUNDS_PER_SESSION {
        now = settle(&mut session, now, &mut events);
        assert_eq!(session.phase(), &RoundPhase::Revealed, "round {}", round);
        assert_eq!(session.round_index(), round);

        let open = Category::ALL
            .into_iter()
            .find(|c| !session.is_used(*c))
            .expect("a category is left for every round");
        assert!(session.select_category(open, now).is_some());
    }

    settle(&mut session, now, &mut events);
    (session, events)
}

#[test]
fn test_full_session_uses_every_category_once() {
    let (session, events) = play_through(42);

    assert!(session.is_complete());
    let used: HashSet<Category> = session.results().iter().map(|r| r.category).collect();
    assert_eq!(used.len(), Category::ALL.len());
    assert_eq!(session.results().len(), ROUNDS_PER_SESSION);

    let names: HashSet<&str> = session.countries().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names.len(), ROUNDS_PER_SESSION);

    assert_eq!(events.len(), 1, "completion is reported exactly once");
}

#[test]
fn test_completion_event_matches_score() {
    let (session, events) = play_through(7);

    let SessionEvent::Completed(results) = &events[0] else {
        panic!("expected completion, got {:?}", events[0]);
    };
    assert_eq!(results.as_slice(), session.results());

    let outcome = GameOutcome::from_results(results.clone());
    let sum: u32 = results.iter().map(|r| r.rank).sum();
    assert_eq!(outcome.total_score, sum);
    assert_eq!(outcome.total_score, session.score());
    assert_eq!(outcome.tier, Tier::classify(sum));
}

#[test]
fn test_points_equal_true_rank() {
    let (session, _) = play_through(3);
    for result in session.results() {
        let country = session
            .countries()
            .iter()
            .find(|c| c.name == result.country)
            .unwrap();
        assert_eq!(Some(result.points), country.rank(result.category));
    }
}

#[test]
fn test_shuffle_ends_on_true_flag() {
    let now = Instant::now();
    let session = new_session(5, now);
    let sequence = session.shuffle_sequence();
    assert_eq!(sequence.len(), SHUFFLE_LENGTH);
    assert_eq!(
        sequence.last().map(String::as_str),
        session.current_country().map(|c| c.flag_or_placeholder())
    );
    for pair in sequence[..SHUFFLE_LENGTH - 1].windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn test_same_seed_same_session() {
    let now = Instant::now();
    let a = new_session(99, now);
    let b = new_session(99, now);
    assert_eq!(a.countries(), b.countries());
    assert_eq!(a.shuffle_sequence(), b.shuffle_sequence());
}

#[test]
fn test_no_events_after_completion() {
    let (mut session, _) = play_through(12);
    let later = Instant::now() + Duration::from_secs(120);
    assert_eq!(session.poll(later), None);
    assert!(session.select_category(Category::Coffee, later).is_none());
}

#[test]
fn test_json_file_too_small_for_a_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"name": "Brazil", "flag": "🇧🇷", "rankings": {{
            "Population": 7, "FIFA": 5, "Size": 5, "Crime": 128,
            "GDP": 9, "Tourism": 45, "Gas": 30, "Coffee": 1 }} }}]"#
    )
    .unwrap();

    assert!(matches!(
        JsonCountries::load(file.path()),
        Err(geohunter::GeoHunterError::DataError(_))
    ));
}

struct TinyPool(Vec<Country>);

impl CountryProvider for TinyPool {
    fn countries(&self) -> &[Country] {
        &self.0
    }
}

#[test]
fn test_session_needs_enough_countries() {
    let pool = BuiltinCountries::new().countries()[..3].to_vec();
    let result = GameSession::new(
        Box::new(TinyPool(pool)),
        GameRng::seeded(1),
        TimingConfig::default(),
        Instant::now(),
    );
    assert!(matches!(
        result,
        Err(geohunter::GeoHunterError::DataError(_))
    ));
}
