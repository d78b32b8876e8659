//! # Bita booking demo
//!
//! Drives the booking and contact forms from the command line against the
//! simulated submission channel: values come from flags, the form validates
//! them, waits out the form's simulated delay, and prints the resulting
//! notices or field errors.
//!
//! ## Running
//!
//! ```bash
//! cargo run --package booking-demo -- --config demos/booking/bita.toml \
//!     book --name "Dana" --phone 0501234567 --email dana@example.com \
//!     --party-size 4 --date 2024-05-17 --time 19:30
//!
//! cargo run --package booking-demo -- --fail contact --name Dana \
//!     --phone 050-1234567 --email d@x.com --message "Hi"
//! ```
//!
//! The process exits non-zero when the submission does not succeed.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use bita_core::logging::setup_logging;
use bita_core::{settings_loader, FormSettings, Settings};
use bita_forms::presets::{booking_form, contact_form, local_today};
use bita_forms::{FormPipeline, NoticeBoard, SimulatedChannel, SubmissionChannel, SubmitOutcome};

#[derive(Parser)]
#[command(name = "booking-demo")]
#[command(about = "Submit the Bita booking or contact form", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (`.toml` or `.json`); defaults plus environment otherwise
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Make the simulated channel reject the submission
    #[arg(long, global = true)]
    fail: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Book a table
    Book(BookArgs),
    /// Send a message to the restaurant
    Contact(ContactArgs),
}

#[derive(Args)]
struct BookArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    email: String,
    /// Number of diners, 1-10, or 11 for "11 or more"
    #[arg(long, default_value = "")]
    party_size: String,
    /// Date as YYYY-MM-DD, between tomorrow and 30 days from today
    #[arg(long, default_value = "")]
    date: String,
    /// Time slot, e.g. 19:30
    #[arg(long, default_value = "")]
    time: String,
    /// Special requests
    #[arg(long, default_value = "")]
    message: String,
}

impl BookArgs {
    fn into_values(self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name),
            ("phone", self.phone),
            ("email", self.email),
            ("partySize", self.party_size),
            ("date", self.date),
            ("time", self.time),
            ("message", self.message),
        ]
    }
}

#[derive(Args)]
struct ContactArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    message: String,
}

impl ContactArgs {
    fn into_values(self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name),
            ("phone", self.phone),
            ("email", self.email),
            ("message", self.message),
        ]
    }
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let Some(path) = path else {
        return Ok(settings_loader::from_env());
    };
    let settings = if path.extension().is_some_and(|ext| ext == "json") {
        settings_loader::from_json_file_with_env(path)
    } else {
        settings_loader::from_toml_file_with_env(path)
    };
    settings.with_context(|| format!("loading settings from {}", path.display()))
}

fn simulated_channel(settings: &FormSettings, fail: bool) -> Arc<dyn SubmissionChannel> {
    let delay = settings.simulated_delay();
    if fail {
        Arc::new(SimulatedChannel::failing(delay))
    } else {
        Arc::new(SimulatedChannel::new(delay))
    }
}

fn print_errors(form: &FormPipeline) {
    let errors = form.errors();
    for spec in form.specs() {
        if let Some(err) = errors.get(&spec.name) {
            println!("  {} ({}): {err}", spec.label, spec.name);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    setup_logging(&settings);

    let notices = NoticeBoard::new();

    let (form, values) = match cli.command {
        Commands::Book(args) => {
            let form = booking_form(
                local_today,
                settings.booking.clone(),
                simulated_channel(&settings.booking, cli.fail),
                Arc::new(notices.clone()),
            );
            (form, args.into_values())
        }
        Commands::Contact(args) => {
            let form = contact_form(
                settings.contact.clone(),
                simulated_channel(&settings.contact, cli.fail),
                Arc::new(notices.clone()),
            );
            (form, args.into_values())
        }
    };

    form.fill(values)?;
    tracing::info!(form = form.name(), "submitting from the command line");
    let outcome = form.submit().await;

    for notice in notices.take() {
        println!("[{}] {notice}", notice.level);
    }

    Ok(match outcome {
        SubmitOutcome::Succeeded => ExitCode::SUCCESS,
        SubmitOutcome::Invalid(_) => {
            println!("Please fix the following fields:");
            print_errors(&form);
            ExitCode::from(2)
        }
        SubmitOutcome::Failed(err) => {
            tracing::error!(error = %err, "submission failed");
            ExitCode::FAILURE
        }
        SubmitOutcome::Dropped(status) => {
            println!("Form is {status}; nothing was sent.");
            ExitCode::FAILURE
        }
    })
}
