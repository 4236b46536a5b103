// src/web/mod.rs
//! Server-rendered pages and their JSON mirror

pub mod render;
pub mod session;
pub mod types;

pub use session::{SessionToken, TOKEN_COOKIE};
pub use types::ViewResponse;

use anyhow::Result;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::serde::json::Json;
use rocket::{get, routes, uri, Build, Rocket, State};
use std::sync::Arc;
use tracing::info;

use crate::core::{ApiStatus, ConfigManager, FetchState, FilterSelection, JobsApi, ServiceClient};
use crate::types::{JobDetailPage, JobSummary, ProfileSummary};
use crate::views::{JobDetailView, JobListView, ProfileView};

pub struct PortalState {
    pub api: Arc<dyn JobsApi>,
    pub fallback_token: Option<String>,
}

fn filters_from(
    employment_type: Option<&str>,
    minimum_package: Option<&str>,
    search: Option<&str>,
) -> FilterSelection {
    FilterSelection::from_params(
        employment_type.unwrap_or_default(),
        minimum_package.unwrap_or_default(),
        search.unwrap_or_default(),
    )
}

fn view_json<T>(state: FetchState<T>) -> (Status, Json<ViewResponse<T>>) {
    let status = match state.status() {
        ApiStatus::Success => Status::Ok,
        _ => Status::BadGateway,
    };
    (status, Json(state.into()))
}

#[get("/")]
pub fn index() -> Redirect {
    Redirect::to(uri!("/jobs"))
}

#[get("/jobs?<employment_type>&<minimum_package>&<search>")]
pub async fn jobs_page(
    employment_type: Option<&str>,
    minimum_package: Option<&str>,
    search: Option<&str>,
    token: SessionToken,
    state: &State<PortalState>,
) -> RawHtml<String> {
    let api = state.api.as_ref();
    let mut profile = ProfileView::new();
    let mut jobs = JobListView::with_filters(filters_from(employment_type, minimum_package, search));

    tokio::join!(profile.activate(api, &token), jobs.activate(api, &token));

    RawHtml(render::jobs_page(&profile, &jobs))
}

#[get("/jobs/<id>")]
pub async fn job_detail_page(
    id: &str,
    token: SessionToken,
    state: &State<PortalState>,
) -> RawHtml<String> {
    let mut view = JobDetailView::new(id);
    view.activate(state.api.as_ref(), &token).await;
    RawHtml(render::job_detail_page(&view))
}

#[get("/profile")]
pub async fn api_profile(
    token: SessionToken,
    state: &State<PortalState>,
) -> (Status, Json<ViewResponse<ProfileSummary>>) {
    let mut view = ProfileView::new();
    view.activate(state.api.as_ref(), &token).await;
    view_json(view.into_state())
}

#[get("/jobs?<employment_type>&<minimum_package>&<search>")]
pub async fn api_jobs(
    employment_type: Option<&str>,
    minimum_package: Option<&str>,
    search: Option<&str>,
    token: SessionToken,
    state: &State<PortalState>,
) -> (Status, Json<ViewResponse<Vec<JobSummary>>>) {
    let mut view = JobListView::with_filters(filters_from(employment_type, minimum_package, search));
    view.activate(state.api.as_ref(), &token).await;
    view_json(view.into_state())
}

#[get("/jobs/<id>")]
pub async fn api_job_detail(
    id: &str,
    token: SessionToken,
    state: &State<PortalState>,
) -> (Status, Json<ViewResponse<JobDetailPage>>) {
    let mut view = JobDetailView::new(id);
    view.activate(state.api.as_ref(), &token).await;
    view_json(view.into_state())
}

fn mount_portal(rocket: Rocket<Build>, state: PortalState) -> Rocket<Build> {
    rocket
        .manage(state)
        .mount("/", routes![index, jobs_page, job_detail_page])
        .mount("/api", routes![api_profile, api_jobs, api_job_detail])
}

/// Rocket instance with default configuration, used by tests
pub fn build_rocket(state: PortalState) -> Rocket<Build> {
    mount_portal(rocket::build(), state)
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let client = ServiceClient::new(&config.api)?;

    info!("Starting job portal");
    info!("Environment: {}", config.environment);
    info!("Jobs API: {}", client.base_url());
    info!(
        "Server: http://{}:{}",
        config.server.address, config.server.port
    );

    let figment = rocket::Config::figment()
        .merge(("address", config.server.address))
        .merge(("port", config.server.port));

    let state = PortalState {
        api: Arc::new(client),
        fallback_token: config.api.token,
    };

    mount_portal(rocket::custom(figment), state)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Web server failed: {}", e))?;

    Ok(())
}
