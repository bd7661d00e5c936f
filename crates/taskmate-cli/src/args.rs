//! Command-line argument definitions using clap.
//!
//! Argument structs here are thin wrappers over the core parameter types:
//! clap-specific attributes (flags, aliases, help text) stay in this layer
//! and each wrapper converts into its core counterpart via `From`, so the
//! core stays free of CLI framework concerns.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use taskmate_core::models::StatusFilter;
use taskmate_core::params::{CreateTask, DeleteTask, ListTasks, TaskId};

/// Command-line interface for the TaskMate task tracker
///
/// TaskMate keeps a personal task list on local disk: add tasks with a
/// title, description, category, and due date, cycle them through the
/// to-do / pending / done lifecycle, filter the visible list by status,
/// and delete what you no longer need.
#[derive(Parser)]
#[command(version, about, name = "tm")]
pub struct Args {
    /// Directory holding the task store. Defaults to
    /// $XDG_DATA_HOME/taskmate
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the TaskMate CLI
///
/// Running `tm` with no command behaves like `tm list`.
#[derive(Subcommand)]
pub enum Commands {
    /// List tasks, optionally filtered by status
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Add a new task
    #[command(alias = "a")]
    Add(AddArgs),
    /// Cycle a task's status one step
    #[command(alias = "t")]
    Toggle(ToggleArgs),
    /// Delete a task permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

/// List tasks
///
/// Shows the current task list, newest first. The status filter is a pure
/// view over stored state and never modifies anything.
#[derive(clap::Args)]
pub struct ListArgs {
    /// Show only tasks with this status
    #[arg(long, value_enum, default_value_t = FilterArg::All)]
    pub status: FilterArg,
}

impl From<ListArgs> for ListTasks {
    fn from(val: ListArgs) -> Self {
        ListTasks {
            filter: val.status.into(),
        }
    }
}

/// Add a new task
///
/// The title is required and must be non-empty after trimming. Category
/// and due date fall back to fixed defaults when omitted.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Title of the task
    pub title: String,
    /// Optional description providing more context about the task
    #[arg(short, long)]
    pub description: Option<String>,
    /// Category label shown on the task badge
    #[arg(short, long)]
    pub category: Option<String>,
    /// Due date in YYYY-MM-DD form
    #[arg(long = "due")]
    pub due_date: Option<String>,
}

impl From<AddArgs> for CreateTask {
    fn from(val: AddArgs) -> Self {
        CreateTask {
            title: val.title,
            description: val.description,
            category: val.category,
            due_date: val.due_date,
        }
    }
}

/// Cycle a task's status
///
/// Statuses advance through the fixed cycle todo -> pending -> done;
/// toggling a done task returns it to pending.
#[derive(clap::Args)]
pub struct ToggleArgs {
    /// ID of the task to toggle
    pub id: String,
}

impl From<ToggleArgs> for TaskId {
    fn from(val: ToggleArgs) -> Self {
        TaskId { id: val.id }
    }
}

/// Delete a task permanently
#[derive(clap::Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteArgs> for DeleteTask {
    fn from(val: DeleteArgs) -> Self {
        DeleteTask {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Command-line argument representation of the status filter modes
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    /// Show every task
    All,
    /// Only tasks not yet started
    Todo,
    /// Only tasks in progress
    Pending,
    /// Only completed tasks
    Done,
}

impl From<FilterArg> for StatusFilter {
    fn from(val: FilterArg) -> Self {
        match val {
            FilterArg::All => StatusFilter::All,
            FilterArg::Todo => StatusFilter::Todo,
            FilterArg::Pending => StatusFilter::Pending,
            FilterArg::Done => StatusFilter::Done,
        }
    }
}

impl std::fmt::Display for FilterArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterArg::All => write!(f, "all"),
            FilterArg::Todo => write!(f, "todo"),
            FilterArg::Pending => write!(f, "pending"),
            FilterArg::Done => write!(f, "done"),
        }
    }
}
