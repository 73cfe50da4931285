use std::path::{Path, PathBuf};

use crate::domain::{casing::to_pascal_case, error::DomainError, validation, value_objects::Orm};

/// A project to be generated.
///
/// Immutable value object; validated at construction. The project itself is
/// persisted only as the directory tree written by generation — there is no
/// separate record of it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTarget {
    name: String,
    orm: Orm,
    database: String,
    root_path: PathBuf,
}

impl ProjectTarget {
    /// Create a validated project target.
    ///
    /// `root_path` is the directory the project will occupy (it must not
    /// exist yet — that is checked by the generation step, not here).
    pub fn new(
        name: impl Into<String>,
        orm: Orm,
        database: impl Into<String>,
        root_path: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let database = database.into();

        validation::validate_identifier("project", &name)?;
        validation::validate_non_empty("database", &database)?;

        Ok(Self {
            name,
            orm,
            database,
            root_path: root_path.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// PascalCase form of the name, for generated class identifiers.
    pub fn name_pascal(&self) -> String {
        to_pascal_case(&self.name)
    }

    pub fn orm(&self) -> Orm {
        self.orm
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_target_constructs() {
        let t = ProjectTarget::new("shop-api", Orm::TypeOrm, "postgres", "/tmp/shop-api").unwrap();
        assert_eq!(t.name(), "shop-api");
        assert_eq!(t.name_pascal(), "ShopApi");
        assert_eq!(t.orm(), Orm::TypeOrm);
    }

    #[test]
    fn rejects_non_kebab_name() {
        assert!(ProjectTarget::new("Shop Api", Orm::Prisma, "postgres", "/tmp/x").is_err());
    }

    #[test]
    fn rejects_empty_database() {
        assert!(ProjectTarget::new("shop-api", Orm::Prisma, "  ", "/tmp/x").is_err());
    }
}
