// src/web/types.rs
use rocket::serde::Serialize;

use crate::core::{ApiStatus, FetchState};

/// JSON mirror of a view's state
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ViewResponse<T> {
    pub status: ApiStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> From<FetchState<T>> for ViewResponse<T> {
    fn from(state: FetchState<T>) -> Self {
        let status = state.status();
        let data = match state {
            FetchState::Success(data) => Some(data),
            _ => None,
        };
        Self { status, data }
    }
}
