//! Immutable reference data for a session: jobs, employees and checklists.

use crate::config::{Checklists, Config};
use crate::errors::{AppError, AppResult};
use crate::models::{ChecklistItem, Employee, Job, SheetKind};

#[derive(Debug, Clone)]
pub struct Catalog {
    jobs: Vec<Job>,
    employees: Vec<Employee>,
    checklists: Checklists,
    default_job: String,
    default_employee: String,
}

impl Catalog {
    /// Build a catalog from a validated configuration.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        cfg.validate()?;

        let default_job = cfg
            .default_job
            .clone()
            .or_else(|| cfg.jobs.first().map(|j| j.id.clone()))
            .ok_or_else(|| AppError::Config("no jobs configured".into()))?;
        let default_employee = cfg
            .default_employee
            .clone()
            .or_else(|| cfg.employees.first().map(|e| e.id.clone()))
            .ok_or_else(|| AppError::Config("no employees configured".into()))?;

        Ok(Self {
            jobs: cfg.jobs.clone(),
            employees: cfg.employees.clone(),
            checklists: cfg.checklists.clone(),
            default_job,
            default_employee,
        })
    }

    pub fn default_job(&self) -> &str {
        &self.default_job
    }

    pub fn default_employee(&self) -> &str {
        &self.default_employee
    }

    pub fn items(&self, sheet: SheetKind) -> &[ChecklistItem] {
        self.checklists.get(sheet)
    }

    pub fn job(&self, id: &str) -> AppResult<&Job> {
        self.jobs
            .iter()
            .find(|j| j.id == id)
            .ok_or_else(|| AppError::unknown("job", id))
    }

    pub fn employee(&self, id: &str) -> AppResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::unknown("employee", id))
    }

    /// Lookup scoped to `sheet`: item ids are not unique across sheets.
    pub fn item(&self, sheet: SheetKind, item_id: &str) -> AppResult<&ChecklistItem> {
        self.items(sheet)
            .iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| AppError::unknown("item", format!("{sheet}:{item_id}")))
    }
}
