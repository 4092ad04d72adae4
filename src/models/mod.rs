//! Data models module
//!
//! Contains the ranking categories, country records and the per-round
//! result records produced during a session.

pub mod category;
pub mod country;
pub mod result;

// Re-export commonly used types
pub use category::Category;
pub use country::Country;
pub use result::{Feedback, RoundResult};
