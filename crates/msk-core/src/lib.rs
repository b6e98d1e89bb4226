//! Core library for the MSK suggestion dashboard.
//!
//! Tracks recommended actions that reduce musculoskeletal risk for employees
//! and the status of each action over its lifecycle.
//!
//! # Layers
//!
//! - **Models** ([`models`]): suggestions, employees, filters and requests
//! - **Filter/sort engine** ([`query`]): pure projections over a list
//! - **Storage** ([`storage`], [`repository`], [`db`]): the async storage
//!   contract and its SQLite implementation
//! - **Store** ([`store`]): the view-model that owns the in-memory list and
//!   applies optimistic updates
//! - **Formatting** ([`format`]): currency, dates, badges and markdown output
//! - **Auth** ([`auth`]) and **seeding** ([`seed`])
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use msk_core::{RepositoryBuilder, SortSpec, SuggestionFilters, SuggestionStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = RepositoryBuilder::new()
//!     .with_database_path(Some("dashboard.db"))
//!     .build()
//!     .await?;
//!
//! msk_core::seed::seed(&repository).await?;
//!
//! let store = SuggestionStore::new(Arc::new(repository));
//! store.load().await?;
//!
//! let pending = SuggestionFilters {
//!     status: Some(msk_core::SuggestionStatus::Pending),
//!     ..Default::default()
//! };
//! for row in store.visible(&pending, SortSpec::default()) {
//!     println!("{} - {}", row.employee.name, row.suggestion.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod db;
pub mod error;
pub mod format;
pub mod models;
pub mod query;
pub mod repository;
pub mod seed;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use auth::{AdminUser, AuthService, Permission};
pub use error::{DashboardError, Result};
pub use format::{
    CreateResult, Employees, OperationStatus, SuggestionDetail, SuggestionTable, UpdateResult,
};
pub use models::{
    CreateSuggestion, DashboardStats, Employee, EmployeeSummary, NewEmployee, Priority,
    RiskLevel, SortDirection, SortField, SortSpec, Source, StatusUpdateResult, Suggestion,
    SuggestionFilters, SuggestionImport, SuggestionStatus, SuggestionType,
    SuggestionWithEmployee, UpdateSuggestion,
};
pub use repository::{Repository, RepositoryBuilder};
pub use seed::SeedReport;
pub use storage::Storage;
pub use store::{StoreState, SuggestionStore};
