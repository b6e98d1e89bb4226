//! Populates storage with the bundled sample dataset.
//!
//! Employees are matched against existing records by name, so seeding twice
//! does not duplicate them. Suggestions are inserted on every run.

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{NewEmployee, SuggestionImport},
    storage::Storage,
};

const SAMPLE_DATA_JSON: &str = include_str!("../assets/sample_data.json");

/// An employee as written in the sample dataset, keyed by a dataset-local ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleEmployee {
    pub id: String,
    #[serde(flatten)]
    pub employee: NewEmployee,
}

/// Employees and suggestions to seed. Suggestion `employeeId`s refer to
/// [`SampleEmployee::id`], not to storage IDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleData {
    pub employees: Vec<SampleEmployee>,
    pub suggestions: Vec<SuggestionImport>,
}

impl SampleData {
    /// The dataset compiled into the library.
    pub fn bundled() -> Result<Self> {
        Ok(serde_json::from_str(SAMPLE_DATA_JSON)?)
    }
}

/// What a seeding run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub employees_added: usize,
    pub employees_matched: usize,
    pub suggestions_added: usize,
    pub suggestions_skipped: usize,
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Seed Complete\n")?;
        writeln!(
            f,
            "- **Employees**: {} added, {} already present",
            self.employees_added, self.employees_matched
        )?;
        write!(f, "- **Suggestions**: {} added", self.suggestions_added)?;
        if self.suggestions_skipped > 0 {
            write!(f, ", {} skipped", self.suggestions_skipped)?;
        }
        writeln!(f)
    }
}

/// Seeds `storage` with the bundled dataset.
pub async fn seed(storage: &dyn Storage) -> Result<SeedReport> {
    let data = SampleData::bundled()?;
    seed_with(storage, &data).await
}

/// Seeds `storage` with `data`.
///
/// # Errors
///
/// Stops at the first storage failure; records inserted before it remain.
pub async fn seed_with(storage: &dyn Storage, data: &SampleData) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    log::info!("Seeding sample data");

    let existing = storage.list_employees().await?;
    let mut id_map: HashMap<&str, String> = HashMap::new();

    for sample in &data.employees {
        if let Some(found) = existing.iter().find(|e| e.name == sample.employee.name) {
            id_map.insert(sample.id.as_str(), found.id.clone());
            report.employees_matched += 1;
            continue;
        }

        let id = storage.create_employee(&sample.employee).await?;
        log::info!("Added employee {} ({id})", sample.employee.name);
        id_map.insert(sample.id.as_str(), id);
        report.employees_added += 1;
    }

    for suggestion in &data.suggestions {
        let Some(employee_id) = id_map.get(suggestion.employee_id.as_str()) else {
            log::warn!(
                "Employee ID {} not found, skipping suggestion",
                suggestion.employee_id
            );
            report.suggestions_skipped += 1;
            continue;
        };

        let record = SuggestionImport {
            employee_id: employee_id.clone(),
            ..suggestion.clone()
        };
        let id = storage.import_suggestion(&record).await?;
        log::info!("Added suggestion {id}");
        report.suggestions_added += 1;
    }

    Ok(report)
}
