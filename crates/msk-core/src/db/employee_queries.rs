//! Employee lookups and inserts.

use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::utils::{enum_column, timestamp_column, timestamp_to_sql};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Employee, NewEmployee},
};

const EMPLOYEE_COLUMNS: &str =
    "id, name, department, job_title, workstation, risk_level, last_assessment";
const INSERT_EMPLOYEE_SQL: &str = "INSERT INTO employees (id, name, department, job_title, workstation, risk_level, last_assessment) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

fn employee_from_row(row: &Row) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        department: row.get(2)?,
        job_title: row.get(3)?,
        workstation: row.get(4)?,
        risk_level: enum_column(row, 5)?,
        last_assessment: timestamp_column(row, 6)?,
    })
}

impl super::Database {
    /// All employees ordered by name.
    pub fn list_employees(&self) -> Result<Vec<Employee>> {
        let query = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY name ASC, rowid ASC");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let employees = stmt
            .query_map([], employee_from_row)
            .db_context("Failed to query employees")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect employees")?;

        Ok(employees)
    }

    /// Retrieves an employee by ID.
    pub fn get_employee(&self, id: &str) -> Result<Option<Employee>> {
        let query = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id], employee_from_row)
            .optional()
            .db_context("Failed to query employee")
    }

    /// Inserts an employee under a freshly generated ID.
    pub fn create_employee(&mut self, employee: &NewEmployee) -> Result<Employee> {
        let id = Uuid::new_v4().to_string();
        self.connection
            .execute(
                INSERT_EMPLOYEE_SQL,
                params![
                    &id,
                    &employee.name,
                    &employee.department,
                    &employee.job_title,
                    &employee.workstation,
                    employee.risk_level.as_str(),
                    timestamp_to_sql(&employee.last_assessment),
                ],
            )
            .db_context("Failed to insert employee")?;

        Ok(Employee {
            id,
            name: employee.name.clone(),
            department: employee.department.clone(),
            job_title: employee.job_title.clone(),
            workstation: employee.workstation.clone(),
            risk_level: employee.risk_level,
            last_assessment: employee.last_assessment,
        })
    }
}
