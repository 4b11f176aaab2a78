// ABOUTME: Pierre zones CLI - inspect the zone catalog and resolve zone selections
// ABOUTME: Runs a selection controller against built-in or file-based user settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print the zone catalog
//! pierre-zones list
//!
//! # Resolve heart rate zones from the built-in defaults
//! pierre-zones show --zone heartRate
//!
//! # Resolve a route path against a settings file
//! pierre-zones show --route /zonesSettings/power --settings ./settings.json
//!
//! # Resolve, then reset the selected zones to defaults
//! pierre-zones show --zone speed --reset
//! ```

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use pierre_zone_settings::{
    config::ZoneSettingsConfig,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    settings::{default_user_zones, source_from_config},
    zones::{
        ControllerHandle, ControllerPhase, ControllerView, RouteParams, SelectionController,
        ZoneCatalog, ZoneRouter, ZoneSyncState,
    },
};
use serde::Serialize;
use tokio::time::timeout;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pierre-zones",
    about = "Pierre training zone settings CLI",
    long_about = "Inspect the training zone catalog and resolve zone selections against user settings."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print every zone definition as JSON
    List,

    /// Resolve a zone type and print the resulting view as JSON
    Show {
        /// Requested zone identifier (empty redirects to the default zone)
        #[arg(long, default_value = "")]
        zone: String,

        /// Route path such as /zonesSettings/heartRate (overrides --zone)
        #[arg(long)]
        route: Option<String>,

        /// JSON user settings file (defaults to built-in zones)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Reset the selected zones to defaults after loading
        #[arg(long)]
        reset: bool,

        /// Seconds to wait for the selection to settle
        #[arg(long, default_value = "5")]
        wait_secs: u64,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.verbose().init()?;
    } else {
        logging.init()?;
    }

    match cli.command {
        Command::List => print_json(&ZoneCatalog::builtin().list()),
        Command::Show {
            zone,
            route,
            settings,
            reset,
            wait_secs,
        } => {
            let initial = match route {
                Some(path) => RouteParams::from_path(&path)?,
                None => RouteParams::new(zone),
            };
            let mut config = ZoneSettingsConfig::from_env();
            if settings.is_some() {
                config.settings_path = settings;
            }
            show(&config, initial, reset, Duration::from_secs(wait_secs)).await
        }
    }
}

async fn show(
    config: &ZoneSettingsConfig,
    initial: RouteParams,
    reset: bool,
    wait: Duration,
) -> AppResult<()> {
    let route = initial.path();
    let state = Arc::new(ZoneSyncState::from_config(config));
    let (router, routes) = ZoneRouter::new(initial);
    let controller = SelectionController::new(
        config,
        ZoneCatalog::builtin(),
        source_from_config(config),
        Arc::new(router),
        Arc::clone(&state),
    )?;
    let mut handle = controller.start(routes);
    info!(controller.id = %handle.id(), "Resolving zone route {}", route);

    let view = settle(
        wait,
        handle.wait_for(|view| view.phase == ControllerPhase::Loaded || view.is_finished()),
    )
    .await?;
    if matches!(view.phase, ControllerPhase::Failed(_)) {
        return handle.join().await;
    }
    print_json(&view)?;

    if reset {
        reset_selection(&state, &mut handle, wait).await?;
    }

    handle.shutdown().await
}

async fn reset_selection(
    state: &ZoneSyncState,
    handle: &mut ControllerHandle,
    wait: Duration,
) -> AppResult<()> {
    let zones = state.reset_to_default(&default_user_zones())?;
    info!("Reset {} zones to defaults", zones.len());

    let view = settle(
        wait,
        handle.wait_for(|view| view.current_zones.as_deref() == Some(zones.as_slice())),
    )
    .await?;
    print_json(&view)
}

async fn settle(
    wait: Duration,
    pending: impl Future<Output = AppResult<ControllerView>>,
) -> AppResult<ControllerView> {
    timeout(wait, pending).await.map_err(|_| {
        AppError::internal(format!(
            "Zone selection did not settle within {}s",
            wait.as_secs()
        ))
    })?
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
