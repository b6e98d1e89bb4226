//! Command-line argument definitions using clap's derive API.
//!
//! Argument structs stay free of business rules and convert into the core
//! request and filter types with `From` impls:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Requests → Store / Repository
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use msk_core::{
    CreateSuggestion, Priority, SortDirection, SortField, SortSpec, Source, SuggestionFilters,
    SuggestionStatus, SuggestionType,
};

/// Workplace MSK suggestion dashboard
///
/// Tracks recommended actions that reduce musculoskeletal risk for employees
/// and the status of each action. Sign in with `msk login <email>` before
/// viewing or changing suggestions.
#[derive(Parser)]
#[command(version, about, name = "msk")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/msk-dashboard/dashboard.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the admin session file. Defaults to
    /// $XDG_STATE_HOME/msk-dashboard/session.json
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Days after which a pending suggestion is flagged as overdue
    #[arg(long, global = true, default_value_t = 30)]
    pub overdue_days: i64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command the dashboard overview is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Sign in as a dashboard admin
    Login {
        /// Email address of the admin
        email: String,
    },
    /// End the current session
    Logout,
    /// Show the signed-in admin
    Whoami,
    /// Load the bundled sample employees and suggestions
    Seed,
    /// Browse employees
    #[command(alias = "e")]
    Employee {
        #[command(subcommand)]
        command: EmployeeCommands,
    },
    /// Manage suggestions
    #[command(alias = "s")]
    Suggestion {
        #[command(subcommand)]
        command: SuggestionCommands,
    },
    /// Show dashboard statistics
    Stats,
}

#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// List all employees by name
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show an employee and their suggestions
    #[command(alias = "s")]
    Show {
        /// ID of the employee
        id: String,
    },
}

#[derive(Subcommand)]
pub enum SuggestionCommands {
    /// List suggestions with optional filters
    #[command(aliases = ["l", "ls"])]
    List(ListSuggestionsArgs),
    /// Show a single suggestion
    #[command(alias = "s")]
    Show {
        /// ID of the suggestion
        id: String,
    },
    /// Create an admin suggestion for an employee
    #[command(alias = "c")]
    Create(CreateSuggestionArgs),
    /// Change the status of a suggestion
    #[command(alias = "u")]
    Status(UpdateStatusArgs),
}

/// Filter and sort options for listing suggestions.
#[derive(ClapArgs)]
pub struct ListSuggestionsArgs {
    /// Only suggestions for this employee ID
    #[arg(long)]
    pub employee: Option<String>,

    /// Suggestion type (exercise, equipment, behavioural, lifestyle)
    #[arg(long, short = 't')]
    pub category: Option<SuggestionType>,

    /// Status (pending, in_progress, completed, dismissed)
    #[arg(long, short)]
    pub status: Option<SuggestionStatus>,

    /// Source (vida, admin)
    #[arg(long)]
    pub source: Option<Source>,

    /// Priority (high, medium, low)
    #[arg(long, short)]
    pub priority: Option<Priority>,

    /// Case-insensitive text matched against description, employee name,
    /// notes and cost
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Sort field (dateUpdated, priority, status)
    #[arg(long, default_value = "dateUpdated")]
    pub sort: SortField,

    /// Sort direction (asc, desc)
    #[arg(long, default_value = "desc")]
    pub direction: SortDirection,

    /// Show at most this many suggestions
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl From<&ListSuggestionsArgs> for SuggestionFilters {
    fn from(val: &ListSuggestionsArgs) -> Self {
        SuggestionFilters {
            employee: val.employee.clone(),
            category: val.category,
            status: val.status,
            source: val.source,
            priority: val.priority,
            search: val.search.clone(),
        }
    }
}

impl From<&ListSuggestionsArgs> for SortSpec {
    fn from(val: &ListSuggestionsArgs) -> Self {
        SortSpec::new(val.sort, val.direction)
    }
}

/// Fields for a new admin suggestion.
#[derive(ClapArgs)]
pub struct CreateSuggestionArgs {
    /// ID of the employee the suggestion is for
    pub employee_id: String,

    /// Suggestion type (exercise, equipment, behavioural, lifestyle)
    #[arg(value_name = "TYPE")]
    pub suggestion_type: SuggestionType,

    /// What should be done
    pub description: String,

    /// Priority (high, medium, low); defaults to medium
    #[arg(long, short)]
    pub priority: Option<Priority>,

    /// Additional notes or context
    #[arg(long)]
    pub notes: Option<String>,

    /// Estimated cost, e.g. 85 or £85.00
    #[arg(long)]
    pub cost: Option<String>,
}

impl From<CreateSuggestionArgs> for CreateSuggestion {
    fn from(val: CreateSuggestionArgs) -> Self {
        CreateSuggestion {
            employee_id: val.employee_id,
            suggestion_type: val.suggestion_type,
            description: val.description,
            priority: val.priority,
            notes: val.notes,
            estimated_cost: val.cost,
        }
    }
}

/// A status change with optional notes and cost.
#[derive(ClapArgs)]
pub struct UpdateStatusArgs {
    /// ID of the suggestion
    pub id: String,

    /// New status (pending, in_progress, completed, dismissed)
    pub status: SuggestionStatus,

    /// Notes to record with the change
    #[arg(long)]
    pub notes: Option<String>,

    /// Estimated cost, e.g. 85 or £85.00
    #[arg(long)]
    pub cost: Option<String>,
}
