//! SQLite-backed [`Storage`] implementation.
//!
//! Each operation opens a [`Database`] on a blocking thread, so a
//! [`Repository`] is cheap to clone and share between tasks.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::task;

use crate::{
    db::Database,
    error::{DashboardError, Result},
    models::{
        CreateSuggestion, Employee, NewEmployee, Suggestion, SuggestionImport, SuggestionStatus,
        UpdateSuggestion,
    },
    storage::Storage,
};

/// Storage over a SQLite database file.
#[derive(Debug, Clone)]
pub struct Repository {
    db_path: PathBuf,
}

impl Repository {
    fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the underlying database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| DashboardError::join(&e))?
    }
}

#[async_trait]
impl Storage for Repository {
    async fn list_suggestions(&self) -> Result<Vec<Suggestion>> {
        self.with_database(|db| db.list_suggestions()).await
    }

    async fn get_suggestion(&self, id: &str) -> Result<Option<Suggestion>> {
        let id = id.to_string();
        self.with_database(move |db| db.get_suggestion(&id)).await
    }

    async fn list_suggestions_by_employee(&self, employee_id: &str) -> Result<Vec<Suggestion>> {
        let employee_id = employee_id.to_string();
        self.with_database(move |db| db.list_suggestions_by_employee(&employee_id))
            .await
    }

    async fn list_suggestions_by_status(
        &self,
        status: SuggestionStatus,
    ) -> Result<Vec<Suggestion>> {
        self.with_database(move |db| db.list_suggestions_by_status(status))
            .await
    }

    async fn create_suggestion(
        &self,
        data: &CreateSuggestion,
        created_by: &str,
    ) -> Result<String> {
        let data = data.clone();
        let created_by = created_by.to_string();
        let suggestion = self
            .with_database(move |db| db.create_suggestion(&data, &created_by))
            .await?;

        log::info!("Created suggestion {}", suggestion.id);
        Ok(suggestion.id)
    }

    async fn update_suggestion(&self, id: &str, update: &UpdateSuggestion) -> Result<()> {
        let id = id.to_string();
        let update = update.clone();
        self.with_database(move |db| db.update_suggestion(&id, &update).map(|_| ()))
            .await
    }

    async fn delete_suggestion(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.with_database(move |db| db.delete_suggestion(&id)).await
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.with_database(|db| db.list_employees()).await
    }

    async fn get_employee(&self, id: &str) -> Result<Option<Employee>> {
        let id = id.to_string();
        self.with_database(move |db| db.get_employee(&id)).await
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<String> {
        let employee = employee.clone();
        let created = self
            .with_database(move |db| db.create_employee(&employee))
            .await?;
        Ok(created.id)
    }

    async fn import_suggestion(&self, record: &SuggestionImport) -> Result<String> {
        let record = record.clone();
        let imported = self
            .with_database(move |db| db.import_suggestion(&record))
            .await?;
        Ok(imported.id)
    }
}

/// Builder for creating and configuring [`Repository`] instances.
#[derive(Debug, Clone, Default)]
pub struct RepositoryBuilder {
    database_path: Option<PathBuf>,
}

impl RepositoryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG data directory:
    /// `$XDG_DATA_HOME/msk-dashboard/dashboard.db` or
    /// `~/.local/share/msk-dashboard/dashboard.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Creates the database file and schema, then returns the repository.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::FileSystem` if the parent directory cannot be
    /// created.
    /// Returns `DashboardError::Database` if database initialization fails
    pub async fn build(self) -> Result<Repository> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| DashboardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let repository = Repository::new(db_path);
        repository.with_database(|_| Ok(())).await?;
        log::debug!("Opened database at {}", repository.db_path.display());

        Ok(repository)
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("msk-dashboard")
            .place_data_file("dashboard.db")
            .map_err(|e| DashboardError::XdgDirectory(e.to_string()))
    }
}
