//! Command handlers: each one checks the session, runs the operation through
//! the store or repository and renders the markdown result.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use msk_core::{
    format::{format_currency, is_valid_currency, parse_currency},
    AdminUser, AuthService, CreateResult, CreateSuggestion, Employees, OperationStatus,
    Permission, Repository, SortSpec, Storage, SuggestionDetail, SuggestionFilters,
    SuggestionStore, SuggestionTable, SuggestionWithEmployee, UpdateResult, UpdateSuggestion,
};

use crate::{
    args::{EmployeeCommands, ListSuggestionsArgs, SuggestionCommands, UpdateStatusArgs},
    renderer::TerminalRenderer,
};

/// Number of suggestions in the overview's recent list.
const RECENT_COUNT: usize = 5;

pub struct Cli {
    repository: Repository,
    store: SuggestionStore,
    auth: AuthService,
    renderer: TerminalRenderer,
    overdue_days: i64,
}

impl Cli {
    pub fn new(
        repository: Repository,
        auth: AuthService,
        renderer: TerminalRenderer,
        overdue_days: i64,
    ) -> Self {
        let store = SuggestionStore::new(Arc::new(repository.clone()))
            .with_overdue_threshold(overdue_days);
        Self {
            repository,
            store,
            auth,
            renderer,
            overdue_days,
        }
    }

    fn require(&self, permission: Permission) -> Result<AdminUser> {
        self.auth.require(permission).context(
            "Sign in with `msk login <email>` as an admin who holds this permission",
        )
    }

    fn table(&self, rows: Vec<SuggestionWithEmployee>) -> SuggestionTable {
        SuggestionTable::new(rows).with_overdue_threshold(self.overdue_days)
    }

    fn detail(&self, row: SuggestionWithEmployee) -> SuggestionDetail {
        SuggestionDetail::new(row).with_overdue_threshold(self.overdue_days)
    }

    pub fn login(&self, email: &str) -> Result<()> {
        let Some(admin) = self.auth.sign_in(email)? else {
            bail!("No admin account for {email}");
        };
        self.renderer.show(&OperationStatus::success(format!(
            "Signed in as {} ({})",
            admin.name, admin.role
        )))
    }

    pub fn logout(&self) -> Result<()> {
        self.auth.sign_out()?;
        self.renderer.show(&OperationStatus::success("Signed out"))
    }

    pub fn whoami(&self) -> Result<()> {
        match self.auth.current_admin() {
            Some(admin) => self.renderer.show(&admin),
            None => self.renderer.render("Not signed in.\n"),
        }
    }

    pub async fn seed(&self) -> Result<()> {
        let report = msk_core::seed::seed(&self.repository)
            .await
            .context("Failed to seed sample data")?;
        self.renderer.show(&report)
    }

    pub async fn stats(&self) -> Result<()> {
        self.require(Permission::ViewAll)?;
        self.store.load().await?;
        self.renderer.show(&self.store.stats())
    }

    /// Statistics followed by the most recently updated suggestions.
    pub async fn overview(&self) -> Result<()> {
        let admin = self.require(Permission::ViewAll)?;
        self.store.load().await?;

        self.renderer
            .render(&format!("# MSK Dashboard\n\nSigned in as {}\n\n", admin.name))?;
        self.renderer.show(&self.store.stats())?;
        self.renderer.render("\n## Recent Suggestions\n\n")?;
        self.renderer
            .show(&self.table(self.store.recent(RECENT_COUNT)))
    }

    pub async fn handle_employee_command(&self, command: EmployeeCommands) -> Result<()> {
        self.require(Permission::ViewAll)?;

        match command {
            EmployeeCommands::List => {
                let employees = self.repository.list_employees().await?;
                self.renderer.show(&Employees(employees))
            }
            EmployeeCommands::Show { id } => {
                let Some(employee) = self.repository.get_employee(&id).await? else {
                    bail!("Employee with ID {id} not found");
                };
                let rows = self
                    .repository
                    .list_suggestions_by_employee(&id)
                    .await?
                    .into_iter()
                    .map(|s| SuggestionWithEmployee::new(s, &employee))
                    .collect();

                self.renderer.show(&employee)?;
                self.renderer.render("\n## Suggestions\n\n")?;
                self.renderer.show(&self.table(rows))
            }
        }
    }

    pub async fn handle_suggestion_command(&self, command: SuggestionCommands) -> Result<()> {
        match command {
            SuggestionCommands::List(args) => self.list_suggestions(&args).await,
            SuggestionCommands::Show { id } => self.show_suggestion(&id).await,
            SuggestionCommands::Create(args) => {
                let admin = self.require(Permission::CreateSuggestions)?;
                let mut request = CreateSuggestion::from(args);
                request.estimated_cost = normalize_cost(request.estimated_cost)?;

                let created = self.store.create(&request, &admin.email).await?;
                self.renderer.show(&CreateResult::new(self.detail(created)))
            }
            SuggestionCommands::Status(args) => self.update_status(args).await,
        }
    }

    async fn list_suggestions(&self, args: &ListSuggestionsArgs) -> Result<()> {
        self.require(Permission::ViewAll)?;
        self.store.load().await?;

        let filters = SuggestionFilters::from(args);
        let mut rows = self.store.visible(&filters, SortSpec::from(args));
        if let Some(limit) = args.limit {
            rows.truncate(limit);
        }
        self.renderer.show(&self.table(rows))
    }

    async fn show_suggestion(&self, id: &str) -> Result<()> {
        self.require(Permission::ViewAll)?;

        let Some(suggestion) = self.repository.get_suggestion(id).await? else {
            bail!("Suggestion with ID {id} not found");
        };
        let Some(employee) = self.repository.get_employee(&suggestion.employee_id).await?
        else {
            bail!("Employee with ID {} not found", suggestion.employee_id);
        };
        self.renderer
            .show(&self.detail(SuggestionWithEmployee::new(suggestion, &employee)))
    }

    async fn update_status(&self, args: UpdateStatusArgs) -> Result<()> {
        self.require(Permission::UpdateStatus)?;
        self.store.load().await?;

        let Some(before) = self.find(&args.id) else {
            bail!("Suggestion with ID {} not found", args.id);
        };

        let cost = normalize_cost(args.cost)?;
        let mut changes = vec![format!(
            "Status: {} → {}",
            before.suggestion.status, args.status
        )];
        if let Some(notes) = args.notes.as_deref().filter(|n| !n.is_empty()) {
            changes.push(format!("Notes: {notes}"));
        }

        match cost {
            Some(cost) => {
                changes.push(format!("Estimated cost: {cost}"));
                let update = UpdateSuggestion::status_change(args.status, args.notes)
                    .with_estimated_cost(Some(cost));
                self.store.update_details(&args.id, &update).await?;
            }
            None => {
                self.store
                    .update_status(&args.id, args.status, args.notes)
                    .await?;
            }
        }

        let Some(after) = self.find(&args.id) else {
            bail!("Suggestion with ID {} not found", args.id);
        };
        self.renderer
            .show(&UpdateResult::with_changes(self.detail(after), changes))
    }

    fn find(&self, id: &str) -> Option<SuggestionWithEmployee> {
        self.store
            .snapshot()
            .suggestions
            .into_iter()
            .find(|s| s.suggestion.id == id)
    }
}

/// Validates a cost argument and renders it with two decimals.
fn normalize_cost(cost: Option<String>) -> Result<Option<String>> {
    let Some(cost) = cost.filter(|c| !c.trim().is_empty()) else {
        return Ok(None);
    };
    let cost = cost.trim();
    if !is_valid_currency(cost) {
        bail!("Invalid cost '{cost}': expected an amount such as 85 or £85.00");
    }
    Ok(Some(match parse_currency(cost) {
        Some(amount) => format_currency(amount),
        None => cost.to_string(),
    }))
}
