//! Implementation of the `hexnest new` command.
//!
//! Responsibility: turn CLI arguments (or prompt answers) into a
//! `ProjectTarget`, call the core generation service, and display results.
//! No business logic lives here.

use std::str::FromStr;

use tracing::{debug, info, instrument};

use hexnest_core::domain::{Orm, ProjectTarget};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    commands::build_service,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::{self, ProjectAnswers},
};

/// Execute the `hexnest new` command.
///
/// Dispatch sequence:
/// 1. Fill answers from flags, or prompt for everything if the name is absent
/// 2. Build a validated `ProjectTarget`
/// 3. Execute generation via `GenerationService`
/// 4. Print the summary and next steps
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let answers = resolve_answers(args, &config)?;

    debug!(
        project = %answers.name,
        orm = %answers.orm,
        database = %answers.database,
        "project answers resolved"
    );

    let root = answers.path.join(&answers.name);
    let target = ProjectTarget::new(&answers.name, answers.orm, &answers.database, root)
        .map_err(|e| CliError::Core(e.into()))?;

    let service = build_service();
    let spinner = output.spinner("Creating project...");
    info!(project = %answers.name, "generation started");

    let result = service.create_project(&target);
    spinner.finish_and_clear();
    let summary = result.map_err(CliError::Core)?;

    output.success(&format!(
        "Project {} created successfully at {}",
        summary.name,
        summary.path.display()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", summary.path.display()))?;
        output.print("  npm install")?;
        output.print(&format!("  hexnest module <name> --project-path {}", summary.path.display()))?;
    }

    Ok(())
}

/// Flag-based when a name was given; interactive otherwise.
fn resolve_answers(args: NewArgs, config: &AppConfig) -> CliResult<ProjectAnswers> {
    match args.name {
        Some(name) => Ok(ProjectAnswers {
            name,
            orm: resolve_orm(args.orm, config)?,
            database: args
                .database
                .or_else(|| config.defaults.database.clone())
                .unwrap_or_else(|| "postgres".into()),
            path: args.path,
        }),
        None => prompt::project(config),
    }
}

fn resolve_orm(flag: Option<crate::cli::OrmArg>, config: &AppConfig) -> CliResult<Orm> {
    if let Some(orm) = flag {
        return Ok(orm.into());
    }
    match &config.defaults.orm {
        Some(configured) => Orm::from_str(configured).map_err(|e| CliError::Core(e.into())),
        None => Ok(Orm::TypeOrm),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
