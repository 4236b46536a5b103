// src/types/view.rs
//! UI-ready view models. Each one is built from its API payload by a single
//! field-by-field mapping; nothing is derived or guessed on the way.

use serde::Serialize;

use super::api::{
    JobDetailsEnvelope, JobDetailsPayload, JobPayload, JobsEnvelope, LifeAtCompanyPayload,
    ProfileEnvelope, ProfilePayload, SimilarJobPayload, SkillPayload,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub name: String,
    pub profile_image_url: String,
    pub short_bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub rating: f64,
    pub company_logo_url: String,
    pub employment_type: String,
    pub location: String,
    pub package_per_annum: String,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub id: String,
    pub title: String,
    pub rating: f64,
    pub company_logo_url: String,
    pub company_website_url: String,
    pub employment_type: String,
    pub location: String,
    pub package_per_annum: String,
    pub job_description: String,
    pub skills: Vec<Skill>,
    pub life_at_company: LifeAtCompany,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeAtCompany {
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarJob {
    pub id: String,
    pub title: String,
    pub rating: f64,
    pub company_logo_url: String,
    pub employment_type: String,
    pub location: String,
    pub job_description: String,
}

/// Everything the job detail page shows after a successful fetch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailPage {
    pub job_details: JobDetail,
    pub similar_jobs: Vec<SimilarJob>,
}

impl From<ProfilePayload> for ProfileSummary {
    fn from(profile: ProfilePayload) -> Self {
        Self {
            name: profile.name,
            profile_image_url: profile.profile_image_url,
            short_bio: profile.short_bio,
        }
    }
}

impl From<ProfileEnvelope> for ProfileSummary {
    fn from(envelope: ProfileEnvelope) -> Self {
        envelope.profile_details.into()
    }
}

impl From<JobPayload> for JobSummary {
    fn from(job: JobPayload) -> Self {
        Self {
            id: job.id,
            title: job.title,
            rating: job.rating,
            company_logo_url: job.company_logo_url,
            employment_type: job.employment_type,
            location: job.location,
            package_per_annum: job.package_per_annum,
            job_description: job.job_description,
        }
    }
}

impl From<SkillPayload> for Skill {
    fn from(skill: SkillPayload) -> Self {
        Self {
            name: skill.name,
            image_url: skill.image_url,
        }
    }
}

impl From<LifeAtCompanyPayload> for LifeAtCompany {
    fn from(life: LifeAtCompanyPayload) -> Self {
        Self {
            description: life.description,
            image_url: life.image_url,
        }
    }
}

impl From<JobDetailsPayload> for JobDetail {
    fn from(job: JobDetailsPayload) -> Self {
        Self {
            id: job.id,
            title: job.title,
            rating: job.rating,
            company_logo_url: job.company_logo_url,
            company_website_url: job.company_website_url,
            employment_type: job.employment_type,
            location: job.location,
            package_per_annum: job.package_per_annum,
            job_description: job.job_description,
            skills: job.skills.into_iter().map(Skill::from).collect(),
            life_at_company: job.life_at_company.into(),
        }
    }
}

impl From<SimilarJobPayload> for SimilarJob {
    fn from(job: SimilarJobPayload) -> Self {
        Self {
            id: job.id,
            title: job.title,
            rating: job.rating,
            company_logo_url: job.company_logo_url,
            employment_type: job.employment_type,
            location: job.location,
            job_description: job.job_description,
        }
    }
}

impl From<JobDetailsEnvelope> for JobDetailPage {
    fn from(envelope: JobDetailsEnvelope) -> Self {
        Self {
            job_details: envelope.job_details.into(),
            similar_jobs: envelope
                .similar_jobs
                .into_iter()
                .map(SimilarJob::from)
                .collect(),
        }
    }
}

/// Map a jobs list envelope; `total` is not part of the view
pub fn job_summaries(envelope: JobsEnvelope) -> Vec<JobSummary> {
    envelope.jobs.into_iter().map(JobSummary::from).collect()
}
