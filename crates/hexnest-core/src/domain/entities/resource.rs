use std::path::{Path, PathBuf};

use crate::domain::{
    casing::to_pascal_case,
    error::DomainError,
    validation,
    value_objects::FieldType,
};

/// A single field on a resource entity.
///
/// Field names follow the caller's camelCase convention; they are rendered
/// verbatim into generated properties.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    name: String,
    field_type: FieldType,
    required: bool,
    unique: bool,
}

impl FieldSpec {
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        required: bool,
        unique: bool,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        validation::validate_non_empty("field name", &name)?;

        Ok(Self {
            name,
            field_type,
            required,
            unique,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn unique(&self) -> bool {
        self.unique
    }
}

/// A resource (entity with CRUD plumbing) to be generated inside a module.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTarget {
    name: String,
    module_name: String,
    project_root: PathBuf,
    fields: Vec<FieldSpec>,
}

impl ResourceTarget {
    pub fn new(
        name: impl Into<String>,
        module_name: impl Into<String>,
        project_root: impl Into<PathBuf>,
        fields: Vec<FieldSpec>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let module_name = module_name.into();

        validation::validate_identifier("resource", &name)?;
        validation::validate_identifier("module", &module_name)?;

        Ok(Self {
            name,
            module_name,
            project_root: project_root.into(),
            fields,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_pascal(&self) -> String {
        to_pascal_case(&self.name)
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_resource_constructs() {
        let field = FieldSpec::new("amount", FieldType::Number, true, false).unwrap();
        let r = ResourceTarget::new("invoice", "billing", "/tmp/shop-api", vec![field]).unwrap();
        assert_eq!(r.name_pascal(), "Invoice");
        assert_eq!(r.fields().len(), 1);
    }

    #[test]
    fn rejects_invalid_resource_name() {
        assert!(ResourceTarget::new("Invoice", "billing", "/tmp/x", vec![]).is_err());
    }

    #[test]
    fn rejects_invalid_module_name() {
        assert!(ResourceTarget::new("invoice", "", "/tmp/x", vec![]).is_err());
    }

    #[test]
    fn field_name_cannot_be_empty() {
        assert!(FieldSpec::new("", FieldType::String, true, false).is_err());
    }
}
