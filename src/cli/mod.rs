//! CLI interface for Edgeguard

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "edgeguard")]
#[command(version = "1.3.0")]
#[command(
    about = "Session edge guard and auth endpoints for the resume analysis platform",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new edgeguard.toml configuration file
    Init,

    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "4680")]
        port: u16,
    },

    /// Show the configured route classification table
    Routes,

    /// Decode a session token and report its claimed expiry
    Check {
        /// The token to inspect
        token: String,
    },
}
