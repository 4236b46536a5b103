// src/types/api.rs
//! Raw payloads exactly as the jobs API sends them (snake_case keys)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileEnvelope {
    pub profile_details: ProfilePayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePayload {
    pub name: String,
    pub profile_image_url: String,
    pub short_bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsEnvelope {
    pub jobs: Vec<JobPayload>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPayload {
    pub id: String,
    pub title: String,
    pub rating: f64,
    pub company_logo_url: String,
    pub employment_type: String,
    pub location: String,
    pub package_per_annum: String,
    pub job_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetailsEnvelope {
    pub job_details: JobDetailsPayload,
    pub similar_jobs: Vec<SimilarJobPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetailsPayload {
    pub id: String,
    pub title: String,
    pub rating: f64,
    pub company_logo_url: String,
    pub company_website_url: String,
    pub employment_type: String,
    pub location: String,
    pub package_per_annum: String,
    pub job_description: String,
    pub skills: Vec<SkillPayload>,
    pub life_at_company: LifeAtCompanyPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillPayload {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeAtCompanyPayload {
    pub description: String,
    pub image_url: String,
}

// Similar jobs come without a package figure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarJobPayload {
    pub id: String,
    pub title: String,
    pub rating: f64,
    pub company_logo_url: String,
    pub employment_type: String,
    pub location: String,
    pub job_description: String,
}
