//! Resume data model

pub mod resume;
pub mod sample;

pub use resume::{
    EducationEntry, ExperienceEntry, Links, PersonalInfo, ProjectEntry, ResumeRecord,
    SkillCategories, Skills,
};
