// src/core/mod.rs
//! Building blocks shared by the three views

pub mod config_manager;
pub mod fetch_state;
pub mod filters;
pub mod jobs_api;
pub mod service_client;
pub mod token_store;

pub use config_manager::ConfigManager;
pub use fetch_state::{ApiStatus, FetchController, FetchState, Projection, RequestTicket};
pub use filters::{FilterSelection, JobsQuery};
pub use jobs_api::{ApiRequest, JobsApi};
pub use service_client::ServiceClient;
pub use token_store::{EnvTokenStore, StaticToken, TokenStore};
