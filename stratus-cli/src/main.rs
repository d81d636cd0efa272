// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Stratus CLI
//!
//! Command-line interface for Stratus Lambda deployment automation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stratus_core::DEFAULT_CONFIG_FILE;

mod commands;

/// Stratus - Deployment automation for AWS Lambda
#[derive(Parser)]
#[command(name = "stratus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a notification event to Lambda when a message is published on a SNS topic
    AddSnsEventSource {
        /// The ARN of the SNS topic
        #[arg(long)]
        topic: Option<String>,

        /// Bind to a particular version (e.g. production); defaults to the latest version
        #[arg(long)]
        version: Option<String>,

        /// Directory with project files
        #[arg(long, default_value = ".")]
        source: PathBuf,

        /// Config file containing the resource names
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    // Dispatch to command handlers
    let result = match cli.command {
        Commands::AddSnsEventSource {
            topic,
            version,
            source,
            config,
        } => commands::add_sns_event_source::execute(topic, version, source, config).await,
    };

    if let Err(e) = result {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}
