//! Resume quality scoring
//!
//! Pure, synchronous functions over a borrowed [`ResumeRecord`]: nothing is
//! cached and the input is never mutated, so they are safe to call on
//! every edit.
//!
//! [`ResumeRecord`]: crate::model::ResumeRecord

pub mod bullets;
pub mod engine;
pub mod heuristics;
pub mod improvements;
pub mod rules;

pub use bullets::{analyze_bullets, has_bullet_issues, BulletAnalysis, BulletFeedback};
pub use engine::{compute_ats_score, BreakdownItem, ScoreResult};
pub use improvements::generate_improvements;
