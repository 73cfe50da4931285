//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use hexnest_core::domain::Orm as CoreOrm;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "hexnest",
    bin_name = "hexnest",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} NestJS scaffolding with hexagonal architecture and CQRS",
    long_about = "Hexnest generates NestJS project structures following \
                  hexagonal architecture and CQRS, wired to TypeORM, Prisma, \
                  or Mongoose.",
    after_help = "EXAMPLES:\n\
        \x20 hexnest new shop-api --orm typeorm --database postgres\n\
        \x20 hexnest module billing --project-path ./shop-api\n\
        \x20 hexnest resource invoice --project-path ./shop-api --module-name billing\n\
        \x20 hexnest completions bash > /usr/share/bash-completion/completions/hexnest",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new NestJS project with hexagonal architecture.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 hexnest new shop-api\n\
            \x20 hexnest new shop-api --orm prisma --database postgres\n\
            \x20 hexnest new blog --orm mongoose --database mongodb --path ./work\n\n\
            Omit the project name to be prompted for every field."
    )]
    New(NewArgs),

    /// Generate a new module inside an existing project.
    #[command(
        visible_alias = "m",
        about = "Generate a new module",
        after_help = "EXAMPLES:\n\
            \x20 hexnest module billing\n\
            \x20 hexnest module users --project-path ./shop-api --features crud,validation"
    )]
    Module(ModuleArgs),

    /// Generate a new resource (entity with CRUD) inside a module.
    #[command(
        visible_alias = "r",
        about = "Generate a new resource",
        after_help = "EXAMPLES:\n\
            \x20 hexnest resource invoice --module-name billing\n\
            \x20 hexnest resource user --project-path ./shop-api --module-name users\n\n\
            Omit the resource name to be prompted, including for fields."
    )]
    Resource(ResourceArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 hexnest completions bash > ~/.local/share/bash-completion/completions/hexnest\n\
            \x20 hexnest completions zsh  > ~/.zfunc/_hexnest\n\
            \x20 hexnest completions fish > ~/.config/fish/completions/hexnest.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `hexnest new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name (kebab-case).  Omit to enter interactive mode.
    #[arg(value_name = "PROJECT_NAME", help = "Project name (kebab-case)")]
    pub name: Option<String>,

    /// ORM to wire the project to.
    #[arg(long = "orm", value_name = "ORM", value_enum, help = "ORM (typeorm, prisma, mongoose)")]
    pub orm: Option<OrmArg>,

    /// Database kind recorded in the generated configuration.
    #[arg(
        long = "database",
        value_name = "DATABASE",
        help = "Database type (e.g. postgres, mysql, mongodb)"
    )]
    pub database: Option<String>,

    /// Directory the project directory is created under.
    #[arg(
        long = "path",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory for the project"
    )]
    pub path: PathBuf,
}

// ── module ────────────────────────────────────────────────────────────────────

/// Arguments for `hexnest module`.
#[derive(Debug, Args)]
pub struct ModuleArgs {
    /// Module name (kebab-case).  Omit to enter interactive mode.
    #[arg(value_name = "MODULE_NAME", help = "Module name (kebab-case)")]
    pub name: Option<String>,

    /// Root of the target project.
    #[arg(
        long = "project-path",
        value_name = "DIR",
        default_value = ".",
        help = "Project path"
    )]
    pub project_path: PathBuf,

    /// Feature tags to record on the module.
    #[arg(
        long = "features",
        value_name = "LIST",
        help = "Comma-separated list of features (e.g. crud,validation)"
    )]
    pub features: Option<String>,
}

// ── resource ──────────────────────────────────────────────────────────────────

/// Arguments for `hexnest resource`.
#[derive(Debug, Args)]
pub struct ResourceArgs {
    /// Resource name (kebab-case).  Omit to enter interactive mode.
    #[arg(value_name = "RESOURCE_NAME", help = "Resource name (kebab-case)")]
    pub name: Option<String>,

    /// Root of the target project.
    #[arg(
        long = "project-path",
        value_name = "DIR",
        default_value = ".",
        help = "Project path"
    )]
    pub project_path: PathBuf,

    /// Module to generate the resource into.
    #[arg(long = "module-name", value_name = "NAME", help = "Target module name")]
    pub module_name: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `hexnest completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported ORMs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OrmArg {
    Typeorm,
    Prisma,
    Mongoose,
}

impl From<OrmArg> for CoreOrm {
    fn from(orm: OrmArg) -> Self {
        match orm {
            OrmArg::Typeorm => CoreOrm::TypeOrm,
            OrmArg::Prisma => CoreOrm::Prisma,
            OrmArg::Mongoose => CoreOrm::Mongoose,
        }
    }
}

impl std::fmt::Display for OrmArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", CoreOrm::from(*self))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        // clap's internal consistency check — catches conflicts, missing values, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command_with_flags() {
        let cli = Cli::parse_from([
            "hexnest", "new", "shop-api", "--orm", "prisma", "--database", "postgres",
        ]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name.as_deref(), Some("shop-api"));
                assert_eq!(args.orm, Some(OrmArg::Prisma));
                assert_eq!(args.database.as_deref(), Some("postgres"));
                assert_eq!(args.path, PathBuf::from("."));
            }
            other => panic!("expected New, got {other:?}"),
        }
    }

    #[test]
    fn new_name_is_optional() {
        let cli = Cli::parse_from(["hexnest", "new"]);
        assert!(matches!(cli.command, Commands::New(NewArgs { name: None, .. })));
    }

    #[test]
    fn parse_module_command() {
        let cli = Cli::parse_from([
            "hexnest", "module", "billing", "--project-path", "/tmp/shop-api", "--features",
            "crud,validation",
        ]);
        match cli.command {
            Commands::Module(args) => {
                assert_eq!(args.name.as_deref(), Some("billing"));
                assert_eq!(args.project_path, PathBuf::from("/tmp/shop-api"));
                assert_eq!(args.features.as_deref(), Some("crud,validation"));
            }
            other => panic!("expected Module, got {other:?}"),
        }
    }

    #[test]
    fn parse_resource_command() {
        let cli = Cli::parse_from([
            "hexnest", "resource", "invoice", "--module-name", "billing",
        ]);
        match cli.command {
            Commands::Resource(args) => {
                assert_eq!(args.name.as_deref(), Some("invoice"));
                assert_eq!(args.module_name.as_deref(), Some("billing"));
            }
            other => panic!("expected Resource, got {other:?}"),
        }
    }

    #[test]
    fn orm_arg_converts_to_core() {
        assert_eq!(CoreOrm::from(OrmArg::Typeorm), CoreOrm::TypeOrm);
        assert_eq!(CoreOrm::from(OrmArg::Prisma), CoreOrm::Prisma);
        assert_eq!(CoreOrm::from(OrmArg::Mongoose), CoreOrm::Mongoose);
    }

    #[test]
    fn unknown_orm_is_rejected() {
        let result = Cli::try_parse_from(["hexnest", "new", "x", "--orm", "sequelize"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["hexnest", "--quiet", "--verbose", "new", "x"]);
        assert!(result.is_err());
    }
}
