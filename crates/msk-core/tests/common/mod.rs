#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use jiff::Timestamp;
use msk_core::{
    CreateSuggestion, DashboardError, Employee, NewEmployee, Priority, RepositoryBuilder,
    Result, RiskLevel, Source, Storage, Suggestion, SuggestionImport, SuggestionStatus,
    SuggestionType, UpdateSuggestion,
};
use tempfile::TempDir;
use tokio::sync::Notify;

pub const DAY_MS: i64 = 86_400_000;

/// Helper function to create a test repository
pub async fn create_test_repository() -> (TempDir, msk_core::Repository) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let repository = RepositoryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create repository");
    (temp_dir, repository)
}

pub fn ts(ms: i64) -> Timestamp {
    Timestamp::from_millisecond(ms).expect("valid timestamp")
}

pub fn new_employee(name: &str, risk_level: RiskLevel) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        department: "Finance".to_string(),
        job_title: "Analyst".to_string(),
        workstation: "Desk 1".to_string(),
        risk_level,
        last_assessment: ts(1_700_000_000_000),
    }
}

pub fn employee(id: &str, name: &str) -> Employee {
    let fields = new_employee(name, RiskLevel::High);
    Employee {
        id: id.to_string(),
        name: fields.name,
        department: fields.department,
        job_title: fields.job_title,
        workstation: fields.workstation,
        risk_level: fields.risk_level,
        last_assessment: fields.last_assessment,
    }
}

pub fn suggestion(
    id: &str,
    employee_id: &str,
    status: SuggestionStatus,
    priority: Priority,
    updated_ms: i64,
) -> Suggestion {
    Suggestion {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        suggestion_type: SuggestionType::Equipment,
        description: format!("Suggestion {id}"),
        status,
        priority,
        source: Source::Vida,
        created_by: "vida-system@company.com".to_string(),
        date_created: ts(updated_ms - DAY_MS),
        date_updated: ts(updated_ms),
        date_completed: (status == SuggestionStatus::Completed).then(|| ts(updated_ms)),
        notes: None,
        estimated_cost: None,
    }
}

pub fn create_request(employee_id: &str, description: &str) -> CreateSuggestion {
    CreateSuggestion {
        employee_id: employee_id.to_string(),
        suggestion_type: SuggestionType::Exercise,
        description: description.to_string(),
        priority: Some(Priority::High),
        notes: None,
        estimated_cost: None,
    }
}

/// Holds a storage call open until the test releases it.
#[derive(Default)]
pub struct Gate {
    entered: Notify,
    release: Notify,
}

impl Gate {
    async fn pass(&self) {
        self.entered.notify_one();
        self.release.notified().await;
    }

    /// Waits until a storage call reaches the gate.
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[derive(Default)]
struct Records {
    suggestions: Vec<Suggestion>,
    employees: Vec<Employee>,
    next_id: usize,
}

/// In-memory storage with failure injection.
#[derive(Default)]
pub struct FakeStorage {
    records: Mutex<Records>,
    pub fail_loads: AtomicBool,
    pub fail_updates: AtomicBool,
    pub fail_creates: AtomicBool,
    pub list_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub load_gate: Option<Arc<Gate>>,
    pub update_gate: Option<Arc<Gate>>,
    /// One gate per list call, taken in call order
    queued_load_gates: Mutex<VecDeque<Arc<Gate>>>,
}

impl FakeStorage {
    pub fn new(employees: Vec<Employee>, suggestions: Vec<Suggestion>) -> Self {
        Self {
            records: Mutex::new(Records {
                suggestions,
                employees,
                next_id: 0,
            }),
            ..Default::default()
        }
    }

    pub fn with_load_gate(mut self, gate: Arc<Gate>) -> Self {
        self.load_gate = Some(gate);
        self
    }

    pub fn with_queued_load_gates(self, gates: Vec<Arc<Gate>>) -> Self {
        *self.queued_load_gates.lock().unwrap() = gates.into();
        self
    }

    pub fn with_update_gate(mut self, gate: Arc<Gate>) -> Self {
        self.update_gate = Some(gate);
        self
    }

    /// The persisted copy of a suggestion.
    pub fn stored(&self, id: &str) -> Option<Suggestion> {
        self.records
            .lock()
            .unwrap()
            .suggestions
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    /// Changes a stored record behind the store's back.
    pub fn set_description(&self, id: &str, description: &str) {
        let mut records = self.records.lock().unwrap();
        if let Some(s) = records.suggestions.iter_mut().find(|s| s.id == id) {
            s.description = description.to_string();
        }
    }

    fn failure(message: &str) -> DashboardError {
        DashboardError::Configuration {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl Storage for FakeStorage {
    async fn list_suggestions(&self) -> Result<Vec<Suggestion>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.load_gate {
            gate.pass().await;
        }
        let queued = self.queued_load_gates.lock().unwrap().pop_front();
        if let Some(gate) = queued {
            gate.pass().await;
        }
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(Self::failure("storage unreachable"));
        }
        let mut suggestions = self.records.lock().unwrap().suggestions.clone();
        suggestions.sort_by(|a, b| b.date_updated.cmp(&a.date_updated));
        Ok(suggestions)
    }

    async fn get_suggestion(&self, id: &str) -> Result<Option<Suggestion>> {
        Ok(self.stored(id))
    }

    async fn list_suggestions_by_employee(&self, employee_id: &str) -> Result<Vec<Suggestion>> {
        let all = self.list_suggestions().await?;
        Ok(all.into_iter().filter(|s| s.employee_id == employee_id).collect())
    }

    async fn list_suggestions_by_status(
        &self,
        status: SuggestionStatus,
    ) -> Result<Vec<Suggestion>> {
        let all = self.list_suggestions().await?;
        Ok(all.into_iter().filter(|s| s.status == status).collect())
    }

    async fn create_suggestion(
        &self,
        data: &CreateSuggestion,
        created_by: &str,
    ) -> Result<String> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(Self::failure("write rejected"));
        }
        let mut records = self.records.lock().unwrap();
        records.next_id += 1;
        let id = format!("new-{}", records.next_id);
        let now = Timestamp::now();
        records.suggestions.push(Suggestion {
            id: id.clone(),
            employee_id: data.employee_id.clone(),
            suggestion_type: data.suggestion_type,
            description: data.description.clone(),
            status: SuggestionStatus::Pending,
            priority: data.priority_or_default(),
            source: Source::Admin,
            created_by: created_by.to_string(),
            date_created: now,
            date_updated: now,
            date_completed: None,
            notes: data.notes().map(String::from),
            estimated_cost: data.estimated_cost().map(String::from),
        });
        Ok(id)
    }

    async fn update_suggestion(&self, id: &str, update: &UpdateSuggestion) -> Result<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.update_gate {
            gate.pass().await;
        }
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(Self::failure("write rejected"));
        }
        let mut records = self.records.lock().unwrap();
        let record = records
            .suggestions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| DashboardError::SuggestionNotFound { id: id.to_string() })?;
        update.apply_to(record, Timestamp::now());
        Ok(())
    }

    async fn delete_suggestion(&self, id: &str) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        let before = records.suggestions.len();
        records.suggestions.retain(|s| s.id != id);
        if records.suggestions.len() == before {
            return Err(DashboardError::SuggestionNotFound { id: id.to_string() });
        }
        Ok(())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(Self::failure("storage unreachable"));
        }
        let mut employees = self.records.lock().unwrap().employees.clone();
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(employees)
    }

    async fn get_employee(&self, id: &str) -> Result<Option<Employee>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<String> {
        let mut records = self.records.lock().unwrap();
        records.next_id += 1;
        let id = format!("emp-new-{}", records.next_id);
        records.employees.push(Employee {
            id: id.clone(),
            name: employee.name.clone(),
            department: employee.department.clone(),
            job_title: employee.job_title.clone(),
            workstation: employee.workstation.clone(),
            risk_level: employee.risk_level,
            last_assessment: employee.last_assessment,
        });
        Ok(id)
    }

    async fn import_suggestion(&self, record: &SuggestionImport) -> Result<String> {
        let mut records = self.records.lock().unwrap();
        records.next_id += 1;
        let id = format!("imported-{}", records.next_id);
        records.suggestions.push(Suggestion {
            id: id.clone(),
            employee_id: record.employee_id.clone(),
            suggestion_type: record.suggestion_type,
            description: record.description.clone(),
            status: record.status,
            priority: record.priority,
            source: record.source,
            created_by: record.created_by().to_string(),
            date_created: record.date_created,
            date_updated: record.date_updated,
            date_completed: record.date_completed,
            notes: record.notes.clone(),
            estimated_cost: record.estimated_cost.clone(),
        });
        Ok(id)
    }
}

/// Two employees and four suggestions, s1 the most recently updated.
pub fn fixture() -> FakeStorage {
    FakeStorage::new(fixture_employees(), fixture_suggestions())
}

pub fn fixture_employees() -> Vec<Employee> {
    vec![
        employee("emp-1", "Sarah Johnson"),
        employee("emp-2", "Michael Chen"),
    ]
}

pub fn fixture_suggestions() -> Vec<Suggestion> {
    let base = 1_704_067_200_000; // 2024-01-01
    vec![
        suggestion("s1", "emp-1", SuggestionStatus::Pending, Priority::High, base + 4 * DAY_MS),
        suggestion("s2", "emp-2", SuggestionStatus::InProgress, Priority::Low, base + 3 * DAY_MS),
        suggestion("s3", "emp-1", SuggestionStatus::Completed, Priority::Medium, base + 2 * DAY_MS),
        suggestion("s4", "emp-2", SuggestionStatus::Pending, Priority::High, base + DAY_MS),
    ]
}
