//! Doorlist CLI - Organizer tooling for the registration dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Upload a spreadsheet of attendees
//! doorlist upload registrations.xlsx
//!
//! # Verify a scanned ticket payload at the door
//! doorlist verify 6f1c2e4a-9b3d-4c5e-8f70-123456789abc
//!
//! # Send a ticket email (simulated)
//! doorlist send-ticket --name "Ada Lovelace" --email ada@example.com
//!
//! # Run database migrations
//! doorlist migrate
//! ```
//!
//! # Commands
//!
//! - `upload` - Parse an Excel file and post its rows to the server
//! - `verify` - Look up an attendee by ticket QR payload
//! - `send-ticket` - Simulated ticket email delivery
//! - `migrate` - Run database migrations

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod api;
mod commands;
mod session;
mod spreadsheet;

#[derive(Parser)]
#[command(name = "doorlist")]
#[command(author, version, about = "Doorlist organizer tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a spreadsheet of attendees to the server
    Upload {
        /// Path to the Excel file (.xlsx or .xls)
        file: PathBuf,

        /// Base URL of the Doorlist server
        #[arg(long, default_value = "http://localhost:3000")]
        api_url: String,
    },
    /// Verify an attendee by the identifier scanned from a ticket
    Verify {
        /// The ticket QR payload (an attendee identifier)
        id: String,

        /// Base URL of the Doorlist server
        #[arg(long, default_value = "http://localhost:3000")]
        api_url: String,
    },
    /// Send a ticket email to an attendee (simulated)
    SendTicket {
        /// Attendee name
        #[arg(short, long)]
        name: String,

        /// Attendee email address
        #[arg(short, long)]
        email: String,
    },
    /// Run database migrations
    Migrate,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Upload { file, api_url } => {
            commands::upload::run(&file, &api_url).await?;
        }
        Commands::Verify { id, api_url } => {
            commands::verify::run(&id, &api_url).await?;
        }
        Commands::SendTicket { name, email } => {
            commands::send_ticket::run(&name, &email).await;
        }
        Commands::Migrate => {
            commands::migrate::run().await?;
        }
    }
    Ok(())
}
