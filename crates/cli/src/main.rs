// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod cli;
mod commands;
mod config;

#[cfg(test)]
mod tests;

use clap::Parser;
use color_eyre::Result;
use gearsync::SystemClock;
use gearsync_api::ServiceConfig;
use gearsync_persistence::Persistence;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over -v/-q when set. Logs go to stderr so stdout stays JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match run(args) {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let service_config: ServiceConfig = config::service_config(
        args.reject_completed_cancellation,
        args.allow_completion_without_final_cost,
    );
    let clock: SystemClock = SystemClock::new(config::shop_offset(args.utc_offset_hours)?);
    let mut store: Persistence = config::open_store(args.database.as_deref())?;

    info!(
        policy = ?service_config.policy,
        utc_offset_hours = args.utc_offset_hours,
        "GearSync ready"
    );

    let mut stdout = std::io::stdout().lock();
    commands::execute(
        &mut store,
        &clock,
        &service_config,
        args.command,
        &mut stdout,
    )
}
