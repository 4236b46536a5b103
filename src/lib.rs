//! Job portal front end: profile, searchable job list and job details,
//! rendered from the jobs REST API

pub mod cli;
pub mod core;
pub mod types;
pub mod views;
pub mod web;

#[cfg(test)]
mod tests;

pub use web::{build_rocket, start_web_server, PortalState};
