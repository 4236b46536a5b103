// src/views/job_list.rs
use anyhow::Result;
use tracing::info;

use super::{decode, fetch_json};
use crate::core::{
    ApiRequest, ApiStatus, FetchController, FetchState, FilterSelection, JobsApi, Projection,
    RequestTicket, TokenStore,
};
use crate::types::api::JobsEnvelope;
use crate::types::view::job_summaries;
use crate::types::JobSummary;

/// Searchable, filterable list of job summaries.
///
/// Every filter change refetches. When requests overlap, only the response
/// to the most recently issued one is applied.
pub struct JobListView {
    filters: FilterSelection,
    fetch: FetchController<Vec<JobSummary>>,
    /// What the latest ticket was issued for
    in_flight: Option<ApiRequest>,
}

impl Default for JobListView {
    fn default() -> Self {
        Self::new()
    }
}

impl JobListView {
    pub fn new() -> Self {
        Self::with_filters(FilterSelection::new())
    }

    pub fn with_filters(filters: FilterSelection) -> Self {
        Self {
            filters,
            fetch: FetchController::new("jobs"),
            in_flight: None,
        }
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    /// The request the current selection maps to
    pub fn request(&self) -> ApiRequest {
        ApiRequest::Jobs(self.filters.to_query())
    }

    /// Enter `InProgress` and return what to send. Pair with [`Self::finish`]
    /// when the caller drives the network itself.
    pub fn start(&mut self) -> (RequestTicket, ApiRequest) {
        let request = self.request();
        self.in_flight = Some(request.clone());
        (self.fetch.begin(), request)
    }

    /// The request issued by the latest [`Self::start`], which may differ
    /// from [`Self::request`] once the filters have been edited since
    pub fn last_request(&self) -> Option<&ApiRequest> {
        self.in_flight.as_ref()
    }

    /// Apply a response body. Returns false if the response was stale.
    pub fn finish(&mut self, ticket: RequestTicket, body: Result<serde_json::Value>) -> bool {
        let outcome = decode(body, |envelope: JobsEnvelope| job_summaries(envelope));
        let applied = self.fetch.complete(ticket, outcome);
        if let (true, Some(jobs), Some(request)) =
            (applied, self.fetch.state().data(), self.in_flight.as_ref())
        {
            info!("Loaded {} jobs for {}", jobs.len(), request);
        }
        applied
    }

    pub async fn activate(&mut self, api: &dyn JobsApi, tokens: &dyn TokenStore) {
        let (ticket, request) = self.start();
        let body = fetch_json(api, tokens, &request).await;
        self.finish(ticket, body);
    }

    /// Filters are read fresh, so a retry after a change sends the new ones
    pub async fn retry(&mut self, api: &dyn JobsApi, tokens: &dyn TokenStore) {
        self.activate(api, tokens).await
    }

    /// Typing only updates the text; nothing is fetched until submit
    pub fn set_search_input(&mut self, text: &str) {
        self.filters.set_search(text);
    }

    pub async fn submit_search(&mut self, api: &dyn JobsApi, tokens: &dyn TokenStore) {
        self.activate(api, tokens).await
    }

    pub async fn change_employment_type(
        &mut self,
        api: &dyn JobsApi,
        tokens: &dyn TokenStore,
        code: &str,
        checked: bool,
    ) {
        self.filters.set_employment_type(code, checked);
        self.activate(api, tokens).await
    }

    pub async fn change_minimum_package(
        &mut self,
        api: &dyn JobsApi,
        tokens: &dyn TokenStore,
        code: &str,
    ) {
        self.filters.select_minimum_package(code);
        self.activate(api, tokens).await
    }

    pub fn status(&self) -> ApiStatus {
        self.fetch.status()
    }

    pub fn state(&self) -> &FetchState<Vec<JobSummary>> {
        self.fetch.state()
    }

    pub fn project(&self) -> Projection<'_, Vec<JobSummary>> {
        self.fetch.project()
    }

    pub fn into_state(self) -> FetchState<Vec<JobSummary>> {
        self.fetch.into_state()
    }
}
