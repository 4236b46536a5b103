//! Mock implementations for testing

use anyhow::Result;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::core::{ApiRequest, JobsApi};

#[derive(Debug, Clone)]
pub enum MockReply {
    Json(Value),
    Status(u16),
}

#[derive(Debug, Default)]
struct MockState {
    profile: VecDeque<MockReply>,
    jobs: VecDeque<MockReply>,
    job_details: VecDeque<MockReply>,
    calls: Vec<(ApiRequest, String)>,
}

/// Replays queued replies per endpoint and records every request.
/// Once a queue runs dry the endpoint answers with its canned fixture.
#[derive(Debug, Clone, Default)]
pub struct MockJobsApi {
    state: Arc<Mutex<MockState>>,
}

impl MockJobsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, reply: MockReply) -> Self {
        self.state.lock().unwrap().profile.push_back(reply);
        self
    }

    pub fn with_jobs(self, reply: MockReply) -> Self {
        self.state.lock().unwrap().jobs.push_back(reply);
        self
    }

    pub fn with_job_details(self, reply: MockReply) -> Self {
        self.state.lock().unwrap().job_details.push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        let state = self.state.lock().unwrap();
        state.calls.iter().map(|(request, _)| request.clone()).collect()
    }

    pub fn tokens_seen(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.calls.iter().map(|(_, token)| token.clone()).collect()
    }
}

#[rocket::async_trait]
impl JobsApi for MockJobsApi {
    async fn get_json(&self, request: &ApiRequest, token: &str) -> Result<Value> {
        let reply = {
            let mut state = self.state.lock().unwrap();
            state.calls.push((request.clone(), token.to_string()));
            let (queue, fixture) = match request {
                ApiRequest::Profile => (&mut state.profile, profile_json()),
                ApiRequest::Jobs(_) => (&mut state.jobs, jobs_json()),
                ApiRequest::JobDetails { .. } => (&mut state.job_details, job_details_json()),
            };
            queue.pop_front().unwrap_or(MockReply::Json(fixture))
        };

        match reply {
            MockReply::Json(value) => Ok(value),
            MockReply::Status(status) => anyhow::bail!("HTTP {} error: mock", status),
        }
    }
}

pub fn profile_json() -> Value {
    json!({
        "profile_details": {
            "name": "Rahul Attuluri",
            "profile_image_url": "https://assets.ccbp.in/frontend/react-js/male-avatar-img.png",
            "short_bio": "Lead Software Developer and AI-ML expert"
        }
    })
}

pub fn jobs_json() -> Value {
    json!({
        "jobs": [
            {
                "id": "d6019453-f864-4a2f-8230-6a9642a59466",
                "title": "Devops Engineer",
                "rating": 4,
                "company_logo_url": "https://assets.ccbp.in/frontend/react-js/jobby-app/netflix-img.png",
                "employment_type": "Internship",
                "location": "Delhi",
                "package_per_annum": "10 LPA",
                "job_description": "We are looking for a DevOps Engineer with a minimum of 5 years of industry experience"
            },
            {
                "id": "2b40029d-e5a5-48cc-84a6-b6e12d25625d",
                "title": "Backend Engineer",
                "rating": 3.5,
                "company_logo_url": "https://assets.ccbp.in/frontend/react-js/jobby-app/facebook-img.png",
                "employment_type": "Full Time",
                "location": "Bangalore",
                "package_per_annum": "21 LPA",
                "job_description": "Build & run <fast> services"
            }
        ],
        "total": 2
    })
}

pub fn job_details_json() -> Value {
    json!({
        "job_details": {
            "id": "bb95e51b-b1b2-4d97-bee4-1d5ec2b96751",
            "title": "Devops Engineer",
            "rating": 4,
            "company_logo_url": "https://assets.ccbp.in/frontend/react-js/jobby-app/netflix-img.png",
            "company_website_url": "https://about.netflix.com/en",
            "employment_type": "Internship",
            "location": "Delhi",
            "package_per_annum": "10 LPA",
            "job_description": "We are looking for a DevOps Engineer",
            "skills": [
                {"name": "Docker", "image_url": "https://assets.ccbp.in/frontend/react-js/jobby-app/docker-img.png"},
                {"name": "Kubernetes", "image_url": "https://assets.ccbp.in/frontend/react-js/jobby-app/kubernetes-img.png"}
            ],
            "life_at_company": {
                "description": "Our core philosophy is people over process.",
                "image_url": "https://assets.ccbp.in/frontend/react-js/jobby-app/life-netflix-img.png"
            }
        },
        "similar_jobs": [
            {
                "id": "2b40029d-e5a5-48cc-84a6-b6e12d25625d",
                "title": "Frontend Engineer",
                "rating": 4,
                "company_logo_url": "https://assets.ccbp.in/frontend/react-js/jobby-app/swiggy-img.png",
                "employment_type": "Freelance",
                "location": "Hyderabad",
                "job_description": "Swiggy is hiring"
            }
        ]
    })
}
