//! Interactive prompting.
//!
//! Collects the same structured answers the flag-based path collects, so
//! command handlers never care which path filled them in. Gated behind the
//! default-on `interactive` feature; without it, any command that would need
//! to prompt fails with an actionable error instead of blocking on stdin.

use std::path::PathBuf;

use hexnest_core::domain::{FieldSpec, Orm};

use crate::config::AppConfig;
use crate::error::CliResult;

/// Answers for the project creation flow.
#[derive(Debug, Clone)]
pub struct ProjectAnswers {
    pub name: String,
    pub orm: Orm,
    pub database: String,
    pub path: PathBuf,
}

/// Answers for the module creation flow.
#[derive(Debug, Clone)]
pub struct ModuleAnswers {
    pub name: String,
    pub features: Vec<String>,
}

/// Answers for the resource creation flow.
#[derive(Debug, Clone)]
pub struct ResourceAnswers {
    pub name: String,
    pub module_name: String,
    pub fields: Vec<FieldSpec>,
}

/// Collect project answers interactively.
pub fn project(config: &AppConfig) -> CliResult<ProjectAnswers> {
    imp::project(config)
}

/// Collect module answers interactively.
pub fn module() -> CliResult<ModuleAnswers> {
    imp::module()
}

/// Collect resource answers interactively, offering `modules` as the
/// module picklist.
pub fn resource(modules: &[String]) -> CliResult<ResourceAnswers> {
    imp::resource(modules)
}

#[cfg(feature = "interactive")]
mod imp {
    use super::*;
    use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
    use hexnest_core::domain::{FieldType, validation};

    use crate::error::CliError;

    fn prompt_failed(e: dialoguer::Error) -> CliError {
        CliError::InvalidInput {
            message: format!("prompt interaction failed: {e}"),
            source: None,
        }
    }

    fn core_err(e: hexnest_core::domain::DomainError) -> CliError {
        CliError::Core(e.into())
    }

    pub fn project(config: &AppConfig) -> CliResult<ProjectAnswers> {
        let theme = ColorfulTheme::default();

        let name: String = Input::with_theme(&theme)
            .with_prompt("Project name (kebab-case)")
            .validate_with(|input: &String| -> Result<(), String> {
                validation::validate_identifier("project", input).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(prompt_failed)?;

        let orm_labels = ["TypeORM", "Prisma", "Mongoose"];
        let selected = Select::with_theme(&theme)
            .with_prompt("Select ORM")
            .items(&orm_labels)
            .default(0)
            .interact()
            .map_err(prompt_failed)?;
        let orm = Orm::all()[selected];

        let database: String = Input::with_theme(&theme)
            .with_prompt("Database type (e.g. postgres, mysql, mongodb)")
            .default(
                config
                    .defaults
                    .database
                    .clone()
                    .unwrap_or_else(|| "postgres".into()),
            )
            .interact_text()
            .map_err(prompt_failed)?;

        let path: String = Input::with_theme(&theme)
            .with_prompt("Parent directory for the project")
            .default(".".to_string())
            .interact_text()
            .map_err(prompt_failed)?;

        Ok(ProjectAnswers {
            name,
            orm,
            database,
            path: PathBuf::from(path),
        })
    }

    pub fn module() -> CliResult<ModuleAnswers> {
        let theme = ColorfulTheme::default();

        let name: String = Input::with_theme(&theme)
            .with_prompt("Module name (kebab-case)")
            .validate_with(|input: &String| -> Result<(), String> {
                validation::validate_identifier("module", input).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(prompt_failed)?;

        let feature_labels = ["crud", "validation", "pagination"];
        let preselected = [true, false, false];
        let picked = MultiSelect::with_theme(&theme)
            .with_prompt("Select features")
            .items(&feature_labels)
            .defaults(&preselected)
            .interact()
            .map_err(prompt_failed)?;

        Ok(ModuleAnswers {
            name,
            features: picked.into_iter().map(|i| feature_labels[i].to_string()).collect(),
        })
    }

    pub fn resource(modules: &[String]) -> CliResult<ResourceAnswers> {
        let theme = ColorfulTheme::default();

        let name: String = Input::with_theme(&theme)
            .with_prompt("Resource name (kebab-case)")
            .validate_with(|input: &String| -> Result<(), String> {
                validation::validate_identifier("resource", input).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(prompt_failed)?;

        let selected = Select::with_theme(&theme)
            .with_prompt("Select module")
            .items(modules)
            .default(0)
            .interact()
            .map_err(prompt_failed)?;
        let module_name = modules[selected].clone();

        let mut fields = Vec::new();
        let add_fields = Confirm::with_theme(&theme)
            .with_prompt("Add fields to the resource?")
            .default(true)
            .interact()
            .map_err(prompt_failed)?;

        if add_fields {
            loop {
                let field_name: String = Input::with_theme(&theme)
                    .with_prompt("Field name (camelCase)")
                    .validate_with(|input: &String| -> Result<(), String> {
                        if input.trim().is_empty() {
                            Err("Field name cannot be empty".into())
                        } else {
                            Ok(())
                        }
                    })
                    .interact_text()
                    .map_err(prompt_failed)?;

                let type_labels = ["string", "number", "boolean", "Date", "uuid"];
                let type_index = Select::with_theme(&theme)
                    .with_prompt("Field type")
                    .items(&type_labels)
                    .default(0)
                    .interact()
                    .map_err(prompt_failed)?;
                let field_type: FieldType = type_labels[type_index].parse().map_err(core_err)?;

                let required = Confirm::with_theme(&theme)
                    .with_prompt("Is this field required?")
                    .default(true)
                    .interact()
                    .map_err(prompt_failed)?;

                let unique = Confirm::with_theme(&theme)
                    .with_prompt("Is this field unique?")
                    .default(false)
                    .interact()
                    .map_err(prompt_failed)?;

                fields.push(FieldSpec::new(field_name, field_type, required, unique).map_err(core_err)?);

                let more = Confirm::with_theme(&theme)
                    .with_prompt("Add another field?")
                    .default(true)
                    .interact()
                    .map_err(prompt_failed)?;
                if !more {
                    break;
                }
            }
        }

        Ok(ResourceAnswers {
            name,
            module_name,
            fields,
        })
    }
}

#[cfg(not(feature = "interactive"))]
mod imp {
    use super::*;
    use crate::error::CliError;

    fn unavailable() -> CliError {
        CliError::FeatureNotAvailable {
            feature: "interactive",
        }
    }

    pub fn project(_config: &AppConfig) -> CliResult<ProjectAnswers> {
        Err(unavailable())
    }

    pub fn module() -> CliResult<ModuleAnswers> {
        Err(unavailable())
    }

    pub fn resource(_modules: &[String]) -> CliResult<ResourceAnswers> {
        Err(unavailable())
    }
}
