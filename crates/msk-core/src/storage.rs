//! The storage access layer contract consumed by the suggestion store.
//!
//! [`crate::repository::Repository`] implements it over SQLite; tests
//! substitute in-memory fakes.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{
        CreateSuggestion, Employee, NewEmployee, StatusUpdateResult, Suggestion,
        SuggestionImport, SuggestionStatus, SuggestionWithEmployee, UpdateSuggestion,
    },
};

/// CRUD over suggestions and employees.
///
/// List operations return suggestions most recently updated first and
/// employees ordered by name.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn list_suggestions(&self) -> Result<Vec<Suggestion>>;

    async fn get_suggestion(&self, id: &str) -> Result<Option<Suggestion>>;

    async fn list_suggestions_by_employee(&self, employee_id: &str) -> Result<Vec<Suggestion>>;

    async fn list_suggestions_by_status(&self, status: SuggestionStatus)
        -> Result<Vec<Suggestion>>;

    /// Persists an admin suggestion in the pending status and returns its ID.
    async fn create_suggestion(&self, data: &CreateSuggestion, created_by: &str)
        -> Result<String>;

    /// Merges the present fields of `update` into the stored record.
    ///
    /// # Errors
    ///
    /// * `DashboardError::SuggestionNotFound` - When no suggestion has the ID
    async fn update_suggestion(&self, id: &str, update: &UpdateSuggestion) -> Result<()>;

    async fn delete_suggestion(&self, id: &str) -> Result<()>;

    async fn list_employees(&self) -> Result<Vec<Employee>>;

    async fn get_employee(&self, id: &str) -> Result<Option<Employee>>;

    async fn create_employee(&self, employee: &NewEmployee) -> Result<String>;

    /// Stores a complete record with its own timestamps and returns its ID.
    async fn import_suggestion(&self, record: &SuggestionImport) -> Result<String>;

    /// All suggestions joined with their employee's summary fields.
    ///
    /// Suggestions whose employee cannot be resolved are omitted.
    async fn list_suggestions_with_employees(&self) -> Result<Vec<SuggestionWithEmployee>> {
        let suggestions = self.list_suggestions().await?;
        let employees = self.list_employees().await?;

        Ok(suggestions
            .into_iter()
            .filter_map(|suggestion| {
                let employee = employees.iter().find(|e| e.id == suggestion.employee_id);
                if employee.is_none() {
                    log::debug!(
                        "Omitting suggestion {} with unknown employee {}",
                        suggestion.id,
                        suggestion.employee_id
                    );
                }
                employee.map(|employee| SuggestionWithEmployee::new(suggestion, employee))
            })
            .collect())
    }

    /// Status change reported as a success flag rather than an error.
    ///
    /// Empty notes are treated as absent and leave the stored notes intact.
    async fn update_suggestion_status(
        &self,
        id: &str,
        status: SuggestionStatus,
        notes: Option<String>,
    ) -> StatusUpdateResult {
        let update = UpdateSuggestion::status_change(status, notes);
        match self.update_suggestion(id, &update).await {
            Ok(()) => StatusUpdateResult::ok(),
            Err(e) => {
                log::error!("Error updating suggestion status: {e}");
                StatusUpdateResult::failed(e.to_string())
            }
        }
    }
}
