// src/views/job_detail.rs
use tracing::info;

use super::{decode, fetch_json};
use crate::core::{ApiRequest, ApiStatus, FetchController, FetchState, JobsApi, Projection, TokenStore};
use crate::types::api::JobDetailsEnvelope;
use crate::types::JobDetailPage;

/// One job in full, plus similar jobs. The id comes from the route.
pub struct JobDetailView {
    id: String,
    fetch: FetchController<JobDetailPage>,
}

impl JobDetailView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fetch: FetchController::new("job details"),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn request(&self) -> ApiRequest {
        ApiRequest::JobDetails {
            id: self.id.clone(),
        }
    }

    pub async fn activate(&mut self, api: &dyn JobsApi, tokens: &dyn TokenStore) {
        let request = self.request();
        let ticket = self.fetch.begin();
        let body = fetch_json(api, tokens, &request).await;
        let outcome = decode(body, |envelope: JobDetailsEnvelope| JobDetailPage::from(envelope));
        if self.fetch.complete(ticket, outcome) {
            if let Some(page) = self.fetch.state().data() {
                info!(
                    "Loaded job {} with {} similar jobs",
                    self.id,
                    page.similar_jobs.len()
                );
            }
        }
    }

    pub async fn retry(&mut self, api: &dyn JobsApi, tokens: &dyn TokenStore) {
        self.activate(api, tokens).await
    }

    pub fn status(&self) -> ApiStatus {
        self.fetch.status()
    }

    pub fn state(&self) -> &FetchState<JobDetailPage> {
        self.fetch.state()
    }

    pub fn project(&self) -> Projection<'_, JobDetailPage> {
        self.fetch.project()
    }

    pub fn into_state(self) -> FetchState<JobDetailPage> {
        self.fetch.into_state()
    }
}
