// src/core/fetch_state.rs
//! The four-state fetch machine shared by every view

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    Initial,
    InProgress,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Initial,
    InProgress,
    Success(T),
    Failure,
}

impl<T> FetchState<T> {
    pub fn status(&self) -> ApiStatus {
        match self {
            FetchState::Initial => ApiStatus::Initial,
            FetchState::InProgress => ApiStatus::InProgress,
            FetchState::Success(_) => ApiStatus::Success,
            FetchState::Failure => ApiStatus::Failure,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// What a view should draw for its current state
#[derive(Debug, PartialEq)]
pub enum Projection<'a, T> {
    Loading,
    Data(&'a T),
    Failure,
}

/// Handed out when a fetch starts; only the newest ticket may complete it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug)]
pub struct FetchController<T> {
    name: &'static str,
    state: FetchState<T>,
    issued: u64,
}

impl<T> FetchController<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: FetchState::Initial,
            issued: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn status(&self) -> ApiStatus {
        self.state.status()
    }

    /// Enter `InProgress` for a new request. Any earlier ticket goes stale.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.state = FetchState::InProgress;
        debug!("{}: request #{} in progress", self.name, self.issued);
        RequestTicket(self.issued)
    }

    /// Settle the request behind `ticket`. Returns false when a newer
    /// request has been issued since, in which case nothing changes.
    pub fn complete(&mut self, ticket: RequestTicket, outcome: Result<T>) -> bool {
        if ticket.0 != self.issued {
            debug!(
                "{}: dropping response to request #{} (latest is #{})",
                self.name, ticket.0, self.issued
            );
            return false;
        }

        self.state = match outcome {
            Ok(data) => {
                debug!("{}: request #{} succeeded", self.name, ticket.0);
                FetchState::Success(data)
            }
            Err(e) => {
                warn!("{}: request #{} failed: {:#}", self.name, ticket.0, e);
                FetchState::Failure
            }
        };
        true
    }

    pub fn project(&self) -> Projection<'_, T> {
        match &self.state {
            FetchState::Initial | FetchState::InProgress => Projection::Loading,
            FetchState::Success(data) => Projection::Data(data),
            FetchState::Failure => Projection::Failure,
        }
    }

    pub fn into_state(self) -> FetchState<T> {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_projects_to_loading() {
        let controller: FetchController<u32> = FetchController::new("test");
        assert_eq!(controller.status(), ApiStatus::Initial);
        assert_eq!(controller.project(), Projection::Loading);
    }

    #[test]
    fn test_success_and_failure_transitions() {
        let mut controller = FetchController::new("test");
        let ticket = controller.begin();
        assert_eq!(controller.status(), ApiStatus::InProgress);
        assert!(controller.complete(ticket, Ok(7)));
        assert_eq!(controller.project(), Projection::Data(&7));

        let ticket = controller.begin();
        assert!(controller.complete(ticket, Err(anyhow::anyhow!("HTTP 500"))));
        assert_eq!(controller.status(), ApiStatus::Failure);
        assert_eq!(controller.state().data(), None);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut controller = FetchController::new("test");
        let first = controller.begin();
        let second = controller.begin();

        assert!(controller.complete(second, Ok("second")));
        assert!(!controller.complete(first, Ok("first")));
        assert_eq!(controller.state(), &FetchState::Success("second"));

        // a late failure must not clobber fresh data either
        let third = controller.begin();
        let fourth = controller.begin();
        assert!(controller.complete(fourth, Ok("fourth")));
        assert!(!controller.complete(third, Err(anyhow::anyhow!("timeout"))));
        assert_eq!(controller.status(), ApiStatus::Success);
    }

    #[test]
    fn test_status_serializes_like_api_constants() {
        let value = serde_json::to_value(ApiStatus::InProgress).unwrap();
        assert_eq!(value, "IN_PROGRESS");
    }
}
