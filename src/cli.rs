// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::core::{ApiStatus, ConfigManager, EnvTokenStore, FetchState, FilterSelection, ServiceClient};
use crate::views::{JobDetailView, JobListView, ProfileView};
use crate::web::ViewResponse;

#[derive(Parser)]
#[command(name = "jobby")]
#[command(about = "Browse job postings from the jobs API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Configuration file; defaults apply when it does not exist
    #[arg(long, default_value = "config.yaml", global = true)]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the HTML pages (default)
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the signed-in user's profile
    Profile,
    /// Print jobs matching the given filters
    Jobs {
        #[arg(long, default_value = "")]
        search: String,
        /// Employment type code, repeatable (FULLTIME, PARTTIME, FREELANCE, INTERNSHIP)
        #[arg(long = "employment-type")]
        employment_types: Vec<String>,
        /// Minimum package code, e.g. 1000000 for 10 LPA
        #[arg(long)]
        minimum_package: Option<String>,
    },
    /// Print one job with similar jobs
    Job { id: String },
}

impl Cli {
    pub fn load_config(&self) -> Result<ConfigManager> {
        ConfigManager::load(&self.config)
    }
}

pub async fn handle_command(command: Command, mut config: ConfigManager) -> Result<()> {
    let tokens = EnvTokenStore;

    match command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            crate::start_web_server(config).await
        }
        Command::Profile => {
            let api = ServiceClient::new(&config.api)?;
            let mut view = ProfileView::new();
            view.activate(&api, &tokens).await;
            print_state(view.into_state())
        }
        Command::Jobs {
            search,
            employment_types,
            minimum_package,
        } => {
            let api = ServiceClient::new(&config.api)?;
            let mut filters = FilterSelection::new();
            for code in &employment_types {
                filters.set_employment_type(code, true);
            }
            if let Some(code) = minimum_package.as_deref() {
                filters.select_minimum_package(code);
            }
            filters.set_search(&search);

            let mut view = JobListView::with_filters(filters);
            info!("Fetching {}", view.request());
            view.activate(&api, &tokens).await;
            print_state(view.into_state())
        }
        Command::Job { id } => {
            let api = ServiceClient::new(&config.api)?;
            let mut view = JobDetailView::new(id);
            view.activate(&api, &tokens).await;
            print_state(view.into_state())
        }
    }
}

fn print_state<T: Serialize>(state: FetchState<T>) -> Result<()> {
    let failed = state.status() != ApiStatus::Success;
    let response = ViewResponse::from(state);
    let json = serde_json::to_string_pretty(&response).context("Failed to serialize view")?;
    println!("{}", json);

    if failed {
        anyhow::bail!("Something went wrong. Run again to retry.");
    }
    Ok(())
}
