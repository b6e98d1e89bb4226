//! Suggestion CRUD operations and queries.

use rusqlite::{params, OptionalExtension, Row, ToSql};
use uuid::Uuid;

use super::utils::{
    enum_column, now_millis, optional_timestamp_column, timestamp_column, timestamp_to_sql,
};
use crate::{
    error::{DashboardError, DatabaseResultExt, Result},
    models::{
        CreateSuggestion, Source, Suggestion, SuggestionImport, SuggestionStatus,
        UpdateSuggestion,
    },
};

const SUGGESTION_COLUMNS: &str = "id, employee_id, suggestion_type, description, status, priority, source, created_by, date_created, date_updated, date_completed, notes, estimated_cost";
const INSERT_SUGGESTION_SQL: &str = "INSERT INTO suggestions (id, employee_id, suggestion_type, description, status, priority, source, created_by, date_created, date_updated, date_completed, notes, estimated_cost) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const CHECK_SUGGESTION_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM suggestions WHERE id = ?1)";
const CHECK_EMPLOYEE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?1)";
const DELETE_SUGGESTION_SQL: &str = "DELETE FROM suggestions WHERE id = ?1";

// Most recently updated first; insertion order breaks ties.
const ORDER_BY_RECENT: &str = " ORDER BY date_updated DESC, rowid ASC";

fn suggestion_from_row(row: &Row) -> rusqlite::Result<Suggestion> {
    Ok(Suggestion {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        suggestion_type: enum_column(row, 2)?,
        description: row.get(3)?,
        status: enum_column(row, 4)?,
        priority: enum_column(row, 5)?,
        source: enum_column(row, 6)?,
        created_by: row.get(7)?,
        date_created: timestamp_column(row, 8)?,
        date_updated: timestamp_column(row, 9)?,
        date_completed: optional_timestamp_column(row, 10)?,
        notes: row.get(11)?,
        estimated_cost: row.get(12)?,
    })
}

impl super::Database {
    /// All suggestions, most recently updated first.
    pub fn list_suggestions(&self) -> Result<Vec<Suggestion>> {
        self.query_suggestions("", params![])
    }

    /// Suggestions for one employee, most recently updated first.
    pub fn list_suggestions_by_employee(&self, employee_id: &str) -> Result<Vec<Suggestion>> {
        self.query_suggestions(" WHERE employee_id = ?1", params![employee_id])
    }

    /// Suggestions with the given status, most recently updated first.
    pub fn list_suggestions_by_status(&self, status: SuggestionStatus) -> Result<Vec<Suggestion>> {
        self.query_suggestions(" WHERE status = ?1", params![status.as_str()])
    }

    fn query_suggestions(&self, condition: &str, args: &[&dyn ToSql]) -> Result<Vec<Suggestion>> {
        let query = format!("SELECT {SUGGESTION_COLUMNS} FROM suggestions{condition}{ORDER_BY_RECENT}");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let suggestions = stmt
            .query_map(args, suggestion_from_row)
            .db_context("Failed to query suggestions")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect suggestions")?;

        Ok(suggestions)
    }

    /// Retrieves a suggestion by its ID.
    pub fn get_suggestion(&self, id: &str) -> Result<Option<Suggestion>> {
        let query = format!("SELECT {SUGGESTION_COLUMNS} FROM suggestions WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id], suggestion_from_row)
            .optional()
            .db_context("Failed to query suggestion")
    }

    /// Creates an admin-sourced suggestion in the pending status.
    ///
    /// # Errors
    ///
    /// * `DashboardError::InvalidInput` - When required fields are empty
    /// * `DashboardError::EmployeeNotFound` - When the employee does not exist
    pub fn create_suggestion(
        &mut self,
        request: &CreateSuggestion,
        created_by: &str,
    ) -> Result<Suggestion> {
        request.validate()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let employee_exists: bool = tx
            .query_row(CHECK_EMPLOYEE_EXISTS_SQL, params![&request.employee_id], |row| {
                row.get(0)
            })
            .db_context("Failed to check employee existence")?;
        if !employee_exists {
            return Err(DashboardError::EmployeeNotFound {
                id: request.employee_id.clone(),
            });
        }

        let now = now_millis();
        let suggestion = Suggestion {
            id: Uuid::new_v4().to_string(),
            employee_id: request.employee_id.clone(),
            suggestion_type: request.suggestion_type,
            description: request.description.clone(),
            status: SuggestionStatus::Pending,
            priority: request.priority_or_default(),
            source: Source::Admin,
            created_by: created_by.to_string(),
            date_created: now,
            date_updated: now,
            date_completed: None,
            notes: request.notes().map(String::from),
            estimated_cost: request.estimated_cost().map(String::from),
        };

        Self::insert_suggestion(&tx, &suggestion)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(suggestion)
    }

    /// Stores a complete suggestion record verbatim under a fresh ID.
    pub fn import_suggestion(&mut self, record: &SuggestionImport) -> Result<Suggestion> {
        let suggestion = Suggestion {
            id: Uuid::new_v4().to_string(),
            employee_id: record.employee_id.clone(),
            suggestion_type: record.suggestion_type,
            description: record.description.clone(),
            status: record.status,
            priority: record.priority,
            source: record.source,
            created_by: record.created_by().to_string(),
            date_created: record.date_created,
            date_updated: record.date_updated.max(record.date_created),
            date_completed: match record.status {
                SuggestionStatus::Completed => {
                    Some(record.date_completed.unwrap_or(record.date_updated))
                }
                _ => None,
            },
            notes: record.notes.clone(),
            estimated_cost: record.estimated_cost.clone(),
        };

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        Self::insert_suggestion(&tx, &suggestion)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(suggestion)
    }

    fn insert_suggestion(tx: &rusqlite::Transaction<'_>, suggestion: &Suggestion) -> Result<()> {
        tx.execute(
            INSERT_SUGGESTION_SQL,
            params![
                &suggestion.id,
                &suggestion.employee_id,
                suggestion.suggestion_type.as_str(),
                &suggestion.description,
                suggestion.status.as_str(),
                suggestion.priority.as_str(),
                suggestion.source.as_str(),
                &suggestion.created_by,
                timestamp_to_sql(&suggestion.date_created),
                timestamp_to_sql(&suggestion.date_updated),
                suggestion.date_completed.as_ref().map(timestamp_to_sql),
                suggestion.notes.as_deref(),
                suggestion.estimated_cost.as_deref(),
            ],
        )
        .db_context("Failed to insert suggestion")?;
        Ok(())
    }

    /// Applies a partial update and stamps `date_updated`.
    ///
    /// A status change to completed stamps `date_completed`; a change to any
    /// other status clears it.
    ///
    /// # Errors
    ///
    /// * `DashboardError::SuggestionNotFound` - When no suggestion has the ID
    pub fn update_suggestion(&mut self, id: &str, update: &UpdateSuggestion) -> Result<Suggestion> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_SUGGESTION_EXISTS_SQL, params![id], |row| row.get(0))
            .db_context("Failed to check suggestion existence")?;
        if !exists {
            return Err(DashboardError::SuggestionNotFound { id: id.to_string() });
        }

        let now = timestamp_to_sql(&now_millis());
        let mut assignments = vec!["date_updated = MAX(?, date_created)"];
        let mut params_vec: Vec<Box<dyn ToSql>> = vec![Box::new(now.clone())];

        if let Some(status) = update.status {
            assignments.push("status = ?");
            params_vec.push(Box::new(status.as_str()));
            assignments.push("date_completed = ?");
            params_vec.push(Box::new(
                (status == SuggestionStatus::Completed).then(|| now.clone()),
            ));
        }

        if let Some(ref notes) = update.notes {
            assignments.push("notes = ?");
            params_vec.push(Box::new(notes.clone()));
        }

        if let Some(ref cost) = update.estimated_cost {
            assignments.push("estimated_cost = ?");
            params_vec.push(Box::new(cost.clone()));
        }

        let query = format!("UPDATE suggestions SET {} WHERE id = ?", assignments.join(", "));
        params_vec.push(Box::new(id.to_string()));
        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|b| &**b).collect();

        tx.execute(&query, &params_refs[..])
            .db_context("Failed to update suggestion")?;
        tx.commit().db_context("Failed to commit transaction")?;

        self.get_suggestion(id)?
            .ok_or_else(|| DashboardError::SuggestionNotFound { id: id.to_string() })
    }

    /// Deletes a suggestion.
    pub fn delete_suggestion(&mut self, id: &str) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_SUGGESTION_SQL, params![id])
            .db_context("Failed to delete suggestion")?;

        if deleted == 0 {
            return Err(DashboardError::SuggestionNotFound { id: id.to_string() });
        }
        Ok(())
    }
}
