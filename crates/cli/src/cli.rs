// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line surface.
//!
//! Every appointment operation acts on behalf of the principal named by
//! `--email`. Identity is taken at face value; authentication happens
//! upstream of this tool.

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use gearsync_domain::{Role, ServiceCategory};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// GearSync - booking and appointment lifecycle for a vehicle service shop
#[derive(Debug, Parser)]
#[command(name = "gearsync", author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the `SQLite` database file.
    ///
    /// Without it each invocation starts from an empty in-memory database
    /// that is discarded when the command exits.
    #[arg(short, long, env = "GEARSYNC_DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Refuse to cancel appointments that are already completed
    #[arg(long, global = true)]
    pub reject_completed_cancellation: bool,

    /// Record the estimated cost when completion omits a final cost
    #[arg(long, global = true)]
    pub allow_completion_without_final_cost: bool,

    /// Shop-local offset from UTC, in whole hours
    #[arg(
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        global = true
    )]
    pub utc_offset_hours: i8,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Book a new appointment for one of your vehicles
    #[command(visible_alias = "b")]
    Book {
        #[arg(long)]
        email: String,
        #[arg(long)]
        vehicle: i64,
        /// Shop-local time, e.g. 2026-03-02T09:00
        #[arg(long)]
        at: String,
        /// Service ids, comma separated
        #[arg(long = "services", value_delimiter = ',', required = true)]
        services: Vec<i64>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// List your appointments
    #[command(visible_alias = "ls")]
    List {
        #[arg(long)]
        email: String,
    },

    /// Show one appointment
    Show {
        #[arg(long)]
        email: String,
        id: i64,
    },

    /// Show what you may do with an appointment
    Capabilities {
        #[arg(long)]
        email: String,
        id: i64,
    },

    /// Edit notes and/or time of one of your appointments
    Update {
        #[arg(long)]
        email: String,
        id: i64,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        at: Option<String>,
    },

    /// Move a scheduled appointment to a new time
    Reschedule {
        #[arg(long)]
        email: String,
        id: i64,
        #[arg(long)]
        at: String,
    },

    /// Cancel one of your appointments
    Cancel {
        #[arg(long)]
        email: String,
        id: i64,
    },

    /// Delete one of your appointments before work starts
    Delete {
        #[arg(long)]
        email: String,
        id: i64,
    },

    /// Confirm a scheduled appointment (employees)
    Confirm {
        #[arg(long)]
        email: String,
        id: i64,
    },

    /// Start work on an appointment (employees)
    Start {
        #[arg(long)]
        email: String,
        id: i64,
    },

    /// Record progress on an appointment (employees)
    Progress {
        #[arg(long)]
        email: String,
        id: i64,
        #[arg(long, allow_negative_numbers = true)]
        percent: i32,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Complete an appointment (employees)
    Complete {
        #[arg(long)]
        email: String,
        id: i64,
        #[arg(long, allow_negative_numbers = true)]
        final_cost: Option<Decimal>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show your dashboard totals
    Dashboard {
        #[arg(long)]
        email: String,
    },

    /// List your appointments from tomorrow onward
    Upcoming {
        #[arg(long)]
        email: String,
    },

    /// Show totals over the work assigned to you (employees)
    EmployeeDashboard {
        #[arg(long)]
        email: String,
    },

    /// Populate the directory and catalog
    #[command(subcommand)]
    Seed(SeedCommand),
}

#[derive(Clone, Debug, Subcommand)]
pub enum SeedCommand {
    /// Register a customer or employee
    Principal {
        email: String,
        #[arg(long, value_enum, default_value_t = RoleArg::Customer)]
        role: RoleArg,
    },

    /// Register a vehicle to an owner
    Vehicle {
        #[arg(long)]
        owner: i64,
        #[arg(long)]
        registration: String,
        #[arg(long)]
        make: String,
        #[arg(long)]
        model: String,
        #[arg(long)]
        year: u16,
    },

    /// Add a catalog item
    Service {
        name: String,
        #[arg(long, value_enum)]
        category: CategoryArg,
        #[arg(long)]
        price: Decimal,
        #[arg(long)]
        minutes: u32,
    },

    /// Activate or retire a catalog item
    SetActive {
        id: i64,
        #[arg(long, action = clap::ArgAction::Set)]
        active: bool,
    },

    /// List the whole catalog
    Services,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Customer,
    Employee,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Customer => Self::Customer,
            RoleArg::Employee => Self::Employee,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Maintenance,
    Repair,
    Inspection,
    TireService,
    Bodywork,
    Electrical,
    Other,
}

impl From<CategoryArg> for ServiceCategory {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Maintenance => Self::Maintenance,
            CategoryArg::Repair => Self::Repair,
            CategoryArg::Inspection => Self::Inspection,
            CategoryArg::TireService => Self::TireService,
            CategoryArg::Bodywork => Self::Bodywork,
            CategoryArg::Electrical => Self::Electrical,
            CategoryArg::Other => Self::Other,
        }
    }
}
