//! Implementation of the `hexnest module` command.

use tracing::{debug, info, instrument};

use hexnest_core::domain::ModuleTarget;

use crate::{
    cli::{ModuleArgs, global::GlobalArgs},
    commands::build_service,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::{self, ModuleAnswers},
};

/// Execute the `hexnest module` command.
///
/// The ORM is never asked for here: the core service detects it from the
/// target project's package.json (defaulting to TypeORM).
#[instrument(skip_all)]
pub fn execute(
    args: ModuleArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project_path = args.project_path;

    let answers = match args.name {
        Some(name) => ModuleAnswers {
            name,
            features: parse_features(args.features.as_deref()),
        },
        None => prompt::module()?,
    };

    debug!(module = %answers.name, features = ?answers.features, "module answers resolved");

    let target = ModuleTarget::new(&answers.name, &project_path, answers.features)
        .map_err(|e| CliError::Core(e.into()))?;

    let service = build_service();
    let spinner = output.spinner("Creating module...");
    info!(module = %answers.name, path = %project_path.display(), "generation started");

    let result = service.create_module(&target);
    spinner.finish_and_clear();
    let summary = result.map_err(CliError::Core)?;

    output.success(&format!("Module {} created successfully", summary.name))?;
    Ok(())
}

/// Split a `--features a,b,c` list, dropping empty segments.
fn parse_features(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_default_to_empty() {
        assert!(parse_features(None).is_empty());
    }

    #[test]
    fn features_are_split_and_trimmed() {
        assert_eq!(
            parse_features(Some("crud, validation ,pagination")),
            ["crud", "validation", "pagination"]
        );
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(parse_features(Some("crud,,")), ["crud"]);
    }
}
