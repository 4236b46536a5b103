// src/core/jobs_api.rs
//! The seam between the views and the remote jobs API

use anyhow::Result;
use std::fmt;

use super::filters::JobsQuery;

pub const PROFILE_ENDPOINT: &str = "/profile";
pub const JOBS_ENDPOINT: &str = "/jobs";

/// One request a view can issue. Two equal values produce the same URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Profile,
    Jobs(JobsQuery),
    JobDetails { id: String },
}

impl ApiRequest {
    /// Path and query relative to the API base URL
    pub fn path(&self) -> String {
        match self {
            ApiRequest::Profile => PROFILE_ENDPOINT.to_string(),
            ApiRequest::Jobs(query) => format!("{}?{}", JOBS_ENDPOINT, query.to_query_string()),
            ApiRequest::JobDetails { id } => format!("{}/{}", JOBS_ENDPOINT, id),
        }
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GET {}", self.path())
    }
}

/// Performs authenticated GETs and hands back the decoded JSON body.
/// Any non-2xx status or transport problem is an `Err`.
#[rocket::async_trait]
pub trait JobsApi: Send + Sync {
    async fn get_json(&self, request: &ApiRequest, token: &str) -> Result<serde_json::Value>;
}
