//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod detect_stale_scores;
mod recalculate_all;

pub use detect_stale_scores::DetectStaleScoresUseCase;
pub use recalculate_all::{DEFAULT_TOP_RISKS, RecalculateAllUseCase};
