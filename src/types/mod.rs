// src/types/mod.rs
pub mod api;
pub mod view;

pub use view::{
    JobDetail, JobDetailPage, JobSummary, LifeAtCompany, ProfileSummary, SimilarJob, Skill,
};
