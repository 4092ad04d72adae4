//! Game core
//!
//! The round state machine, score aggregation, and the timer queue and
//! random source they are driven by.

pub mod rng;
pub mod score;
pub mod session;
pub mod timer;

pub use rng::GameRng;
pub use score::{GameOutcome, Insights, PointsBand, Tier};
pub use session::{GameSession, PlacedFlag, RoundPhase, SessionEvent};
pub use timer::TimerQueue;
