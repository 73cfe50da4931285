//! Implementation of the `hexnest resource` command.

use tracing::{debug, info, instrument};

use hexnest_core::{application::ApplicationError, domain::ResourceTarget};

use crate::{
    cli::{ResourceArgs, global::GlobalArgs},
    commands::build_service,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::{self, ResourceAnswers},
};

/// Execute the `hexnest resource` command.
///
/// The project structure is inspected up front: it both validates the
/// preconditions (project exists, has modules) and supplies the module
/// picklist for interactive mode.
#[instrument(skip_all)]
pub fn execute(
    args: ResourceArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project_path = args.project_path;
    let service = build_service();

    let structure = service
        .structure(&project_path)
        .map_err(CliError::Core)?;
    if !structure.exists {
        return Err(CliError::Core(
            ApplicationError::ProjectNotFound {
                path: project_path.clone(),
            }
            .into(),
        ));
    }
    if structure.modules.is_empty() {
        return Err(CliError::Core(ApplicationError::NoModules.into()));
    }

    let answers = match (args.name, args.module_name) {
        (Some(name), Some(module_name)) => ResourceAnswers {
            name,
            module_name,
            // Fields are only collected interactively; the flag path
            // generates the id/timestamp skeleton.
            fields: Vec::new(),
        },
        // A partial flag set still goes through the full prompt; the answers
        // must come out of one place or the other, never mixed.
        _ => prompt::resource(&structure.modules)?,
    };

    debug!(
        resource = %answers.name,
        module = %answers.module_name,
        fields = answers.fields.len(),
        "resource answers resolved"
    );

    let target = ResourceTarget::new(
        &answers.name,
        &answers.module_name,
        &project_path,
        answers.fields,
    )
    .map_err(|e| CliError::Core(e.into()))?;

    let spinner = output.spinner("Creating resource...");
    info!(resource = %answers.name, module = %answers.module_name, "generation started");

    let result = service.create_resource(&target);
    spinner.finish_and_clear();
    let summary = result.map_err(CliError::Core)?;

    output.success(&format!(
        "Resource {} created successfully in module {}",
        summary.name, summary.module_name
    ))?;
    Ok(())
}
