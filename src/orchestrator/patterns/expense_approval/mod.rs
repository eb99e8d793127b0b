//! # Expense Approval Pattern
//!
//! Generates a model-driven expense approval solution as three files inside a fresh,
//! timestamp-qualified directory:
//!
//! ```text
//! <output_root>/
//! └── ExpenseApproval_YYYYMMDD_HHMMSS/
//!     ├── app_definition.json   # app, table, flow and role names
//!     ├── governance.md         # governance report
//!     └── security_roles.json   # per-role privileges, audit and MFA flags
//! ```
//!
//! The documents are fixed content. Apart from the timestamp nothing in them is derived
//! from the [`RequirementSet`]; the requirements only shape what the console echoes.
//!
//! Directory creation is idempotent, so two runs inside the same wall-clock second share
//! one directory and the second run rewrites the same three files. Writes are not atomic
//! and a failure part way through leaves whatever was already written.

use super::SolutionGenerator;
use crate::error::Result;
use crate::model::{GeneratedSolution, PatternId, RequirementSet};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub mod app_definition;
pub mod governance;
pub mod security_roles;

pub const SOLUTION_PREFIX: &str = "ExpenseApproval_";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub const APP_DEFINITION_FILE: &str = "app_definition.json";
pub const GOVERNANCE_FILE: &str = "governance.md";
pub const SECURITY_ROLES_FILE: &str = "security_roles.json";

#[derive(Debug, Default, Clone, Copy)]
pub struct ExpenseApprovalGenerator;

impl ExpenseApprovalGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn solution_name(now: DateTime<Local>) -> String {
        format!("{}{}", SOLUTION_PREFIX, now.format(TIMESTAMP_FORMAT))
    }
}

impl SolutionGenerator for ExpenseApprovalGenerator {
    fn pattern(&self) -> PatternId {
        PatternId::ExpenseApproval
    }

    fn generate_at(
        &self,
        requirements: &RequirementSet,
        output_root: &Path,
        now: DateTime<Local>,
    ) -> Result<GeneratedSolution> {
        let name = Self::solution_name(now);
        let path = output_root.join(&name);
        debug!(
            problem = %requirements.business_problem,
            path = %path.display(),
            "generating expense approval solution"
        );

        fs::create_dir_all(&path)?;

        write_json(&path, APP_DEFINITION_FILE, &app_definition::build())?;
        write_text(&path, GOVERNANCE_FILE, &governance::render(now)?)?;
        write_json(&path, SECURITY_ROLES_FILE, &security_roles::build())?;

        info!(solution = %name, "solution generated");
        Ok(GeneratedSolution {
            name,
            path,
            kind: PatternId::ExpenseApproval,
            files: vec![
                APP_DEFINITION_FILE.to_string(),
                GOVERNANCE_FILE.to_string(),
                SECURITY_ROLES_FILE.to_string(),
            ],
        })
    }
}

fn write_json<T: Serialize>(dir: &Path, file_name: &str, document: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(document)?;
    content.push('\n');
    write_text(dir, file_name, &content)
}

fn write_text(dir: &Path, file_name: &str, content: &str) -> Result<()> {
    let file_path = dir.join(file_name);
    fs::write(&file_path, content)?;
    debug!(file = %file_path.display(), bytes = content.len(), "artifact written");
    Ok(())
}
