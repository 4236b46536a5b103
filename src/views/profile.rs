// src/views/profile.rs
use tracing::info;

use super::{decode, fetch_json};
use crate::core::{ApiRequest, ApiStatus, FetchController, FetchState, JobsApi, Projection, TokenStore};
use crate::types::api::ProfileEnvelope;
use crate::types::ProfileSummary;

/// The signed-in user's profile card
pub struct ProfileView {
    fetch: FetchController<ProfileSummary>,
}

impl Default for ProfileView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileView {
    pub fn new() -> Self {
        Self {
            fetch: FetchController::new("profile"),
        }
    }

    pub fn request(&self) -> ApiRequest {
        ApiRequest::Profile
    }

    pub async fn activate(&mut self, api: &dyn JobsApi, tokens: &dyn TokenStore) {
        let request = self.request();
        let ticket = self.fetch.begin();
        let body = fetch_json(api, tokens, &request).await;
        let outcome = decode(body, |envelope: ProfileEnvelope| ProfileSummary::from(envelope));
        if self.fetch.complete(ticket, outcome) && self.status() == ApiStatus::Success {
            info!("Profile loaded");
        }
    }

    pub async fn retry(&mut self, api: &dyn JobsApi, tokens: &dyn TokenStore) {
        self.activate(api, tokens).await
    }

    pub fn status(&self) -> ApiStatus {
        self.fetch.status()
    }

    pub fn state(&self) -> &FetchState<ProfileSummary> {
        self.fetch.state()
    }

    pub fn project(&self) -> Projection<'_, ProfileSummary> {
        self.fetch.project()
    }

    pub fn into_state(self) -> FetchState<ProfileSummary> {
        self.fetch.into_state()
    }
}
