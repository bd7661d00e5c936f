//! TaskMate CLI application
//!
//! Command-line interface for the TaskMate task tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use taskmate_core::params::ListTasks;
use taskmate_core::TaskStore;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { data_dir, no_color, command } = Args::parse();

    let store = TaskStore::builder()
        .with_data_dir(data_dir)
        .build()
        .context("Failed to initialize task store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("TaskMate started");

    let cli = Cli::new(store, renderer);

    match command {
        Some(Commands::List(list)) => cli.list_tasks(&list.into()).await,
        Some(Commands::Add(add)) => cli.add_task(&add.into()).await,
        Some(Commands::Toggle(toggle)) => cli.toggle_task(&toggle.into()).await,
        Some(Commands::Delete(delete)) => cli.delete_task(&delete.into()).await,
        None => cli.list_tasks(&ListTasks::default()).await,
    }
}
