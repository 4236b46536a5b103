// src/views/mod.rs
//! View-controllers: each owns one fetch state machine and the data it maps

pub mod job_detail;
pub mod job_list;
pub mod profile;

pub use job_detail::JobDetailView;
pub use job_list::JobListView;
pub use profile::ProfileView;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::core::{ApiRequest, JobsApi, TokenStore};

/// Issue one authenticated request for a view
pub(crate) async fn fetch_json(
    api: &dyn JobsApi,
    tokens: &dyn TokenStore,
    request: &ApiRequest,
) -> Result<serde_json::Value> {
    let token = tokens.bearer_token().unwrap_or_else(|| {
        warn!("No bearer token available for {}", request);
        String::new()
    });
    api.get_json(request, &token).await
}

/// Decode a raw response body into its payload shape, then map it
pub(crate) fn decode<P, T>(body: Result<serde_json::Value>, map: impl FnOnce(P) -> T) -> Result<T>
where
    P: DeserializeOwned,
{
    let payload: P = serde_json::from_value(body?).with_context(|| {
        format!(
            "Failed to parse response as {}",
            std::any::type_name::<P>()
        )
    })?;
    Ok(map(payload))
}
