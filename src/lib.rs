//! Resume scoring library
//!
//! The scoring core ([`compute_ats_score`], [`generate_improvements`],
//! [`analyze_bullets`], [`has_bullet_issues`]) is pure and synchronous.
//! The remaining modules load, store and render resumes around it.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod scoring;

pub use config::Config;
pub use error::{Result, ResumeScoreError};
pub use model::ResumeRecord;
pub use scoring::{
    analyze_bullets, compute_ats_score, generate_improvements, has_bullet_issues, BulletAnalysis,
    BulletFeedback, ScoreResult,
};
