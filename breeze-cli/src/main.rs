//! Binary crate for the `breeze` command-line tool.
//!
//! This crate focuses on:
//! - The interactive main menu
//! - Prompting for user input
//! - Human-friendly output and warnings

use clap::Parser;

mod cli;
mod menu;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
