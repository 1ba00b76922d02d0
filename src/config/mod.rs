use crate::errors::{AppError, AppResult};
use crate::models::{ChecklistItem, Employee, Job, SheetKind};
use crate::utils::path::resolve_under;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod defaults;

/// Ordered checklist definitions, one list per sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklists {
    #[serde(default)]
    pub housewire: Vec<ChecklistItem>,
    #[serde(default)]
    pub integration: Vec<ChecklistItem>,
    #[serde(default)]
    pub ee: Vec<ChecklistItem>,
}

impl Checklists {
    pub fn get(&self, sheet: SheetKind) -> &[ChecklistItem] {
        match sheet {
            SheetKind::Housewire => &self.housewire,
            SheetKind::Integration => &self.integration,
            SheetKind::Ee => &self.ee,
        }
    }
}

impl Default for Checklists {
    fn default() -> Self {
        defaults::checklists()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub default_job: Option<String>,
    #[serde(default)]
    pub default_employee: Option<String>,
    #[serde(default = "defaults::jobs")]
    pub jobs: Vec<Job>,
    #[serde(default = "defaults::employees")]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub checklists: Checklists,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_job: None,
            default_employee: None,
            jobs: defaults::jobs(),
            employees: defaults::employees(),
            checklists: Checklists::default(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.qctracker`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".qctracker")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("qctracker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("qctracker.sqlite")
    }

    /// Load configuration from the standard location, or defaults if absent.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Check the static reference data for mismatches the engine would
    /// otherwise only discover as `UnknownKey` at runtime.
    pub fn validate(&self) -> AppResult<()> {
        if self.jobs.is_empty() {
            return Err(AppError::Config("at least one job is required".into()));
        }
        if self.employees.is_empty() {
            return Err(AppError::Config("at least one employee is required".into()));
        }

        if let Some(dup) = first_duplicate(self.jobs.iter().map(|j| j.id.as_str())) {
            return Err(AppError::Config(format!("duplicate job id '{dup}'")));
        }
        if let Some(dup) = first_duplicate(self.employees.iter().map(|e| e.id.as_str())) {
            return Err(AppError::Config(format!("duplicate employee id '{dup}'")));
        }

        for sheet in SheetKind::ALL {
            let items = self.checklists.get(sheet);
            if let Some(dup) = first_duplicate(items.iter().map(|i| i.id.as_str())) {
                return Err(AppError::Config(format!(
                    "duplicate item id '{dup}' in sheet '{sheet}'"
                )));
            }
        }

        if let Some(job) = &self.default_job
            && !self.jobs.iter().any(|j| &j.id == job)
        {
            return Err(AppError::unknown("job", job.clone()));
        }
        if let Some(emp) = &self.default_employee
            && !self.employees.iter().any(|e| &e.id == emp)
        {
            return Err(AppError::unknown("employee", emp.clone()));
        }

        Ok(())
    }

    /// Initialize configuration and database files.
    ///
    /// `config_path` overrides the standard config location. In test mode the
    /// standard config file is left untouched; an explicit `config_path` is
    /// still written. Returns the configuration that was set up.
    pub fn init_all(
        custom_db: Option<String>,
        config_path: Option<&Path>,
        is_test: bool,
    ) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = custom_db
            .map(|name| resolve_under(&dir, &name))
            .unwrap_or_else(Self::database_file);

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        let target = match config_path {
            Some(p) => Some(p.to_path_buf()),
            None if !is_test => Some(Self::config_file()),
            None => None,
        };
        if let Some(path) = target {
            config.save_to(&path)?;
            println!("✅ Config file: {:?}", path);
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}

fn first_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}
