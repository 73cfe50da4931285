//! ORM detection from an existing project's dependency manifest.
//!
//! Used by the module/resource flows so the user never repeats the ORM
//! choice made at project creation.

use std::path::Path;

use tracing::debug;

use crate::{
    application::ports::ManifestSource,
    domain::Orm,
    error::HexnestResult,
};

/// Dependency signatures per ORM, in fixed priority order.
///
/// Each ORM is recognized by either its NestJS integration package or the
/// bare library name. If several signatures are present the first entry in
/// this table wins.
const SIGNATURES: [(Orm, [&str; 2]); 3] = [
    (Orm::TypeOrm, ["@nestjs/typeorm", "typeorm"]),
    (Orm::Prisma, ["@prisma/client", "prisma"]),
    (Orm::Mongoose, ["@nestjs/mongoose", "mongoose"]),
];

/// Detects which ORM an existing project was generated with.
pub struct OrmDetector {
    manifests: Box<dyn ManifestSource>,
}

impl OrmDetector {
    pub fn new(manifests: Box<dyn ManifestSource>) -> Self {
        Self { manifests }
    }

    /// Detect the project's ORM.
    ///
    /// Returns `None` when the manifest is absent or no signature matches —
    /// callers must supply a default (TypeOrm). A missing manifest is an
    /// expected outcome, never an error.
    pub fn detect(&self, project_root: &Path) -> HexnestResult<Option<Orm>> {
        let Some(dependencies) = self.manifests.dependencies(project_root)? else {
            debug!(path = %project_root.display(), "no dependency manifest, detection skipped");
            return Ok(None);
        };

        for (orm, signatures) in SIGNATURES {
            if dependencies.iter().any(|d| signatures.contains(&d.as_str())) {
                debug!(%orm, "ORM detected from dependency manifest");
                return Ok(Some(orm));
            }
        }

        debug!("no known ORM signature in dependency manifest");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedManifest(Option<Vec<String>>);

    impl ManifestSource for FixedManifest {
        fn dependencies(&self, _root: &Path) -> HexnestResult<Option<Vec<String>>> {
            Ok(self.0.clone())
        }
    }

    fn detector(deps: Option<&[&str]>) -> OrmDetector {
        OrmDetector::new(Box::new(FixedManifest(
            deps.map(|d| d.iter().map(|s| s.to_string()).collect()),
        )))
    }

    #[test]
    fn detects_each_orm_by_integration_package() {
        let cases = [
            ("@nestjs/typeorm", Orm::TypeOrm),
            ("@prisma/client", Orm::Prisma),
            ("@nestjs/mongoose", Orm::Mongoose),
        ];
        for (dep, expected) in cases {
            let found = detector(Some(&["@nestjs/common", dep]))
                .detect(Path::new("/p"))
                .unwrap();
            assert_eq!(found, Some(expected), "for {dep}");
        }
    }

    #[test]
    fn detects_by_bare_library_name() {
        let found = detector(Some(&["prisma"])).detect(Path::new("/p")).unwrap();
        assert_eq!(found, Some(Orm::Prisma));
    }

    #[test]
    fn priority_order_when_multiple_match() {
        let found = detector(Some(&["mongoose", "typeorm"]))
            .detect(Path::new("/p"))
            .unwrap();
        assert_eq!(found, Some(Orm::TypeOrm));
    }

    #[test]
    fn missing_manifest_is_none_not_error() {
        assert_eq!(detector(None).detect(Path::new("/p")).unwrap(), None);
    }

    #[test]
    fn unrecognized_dependencies_are_none() {
        let found = detector(Some(&["@nestjs/common", "rxjs"]))
            .detect(Path::new("/p"))
            .unwrap();
        assert_eq!(found, None);
    }
}
