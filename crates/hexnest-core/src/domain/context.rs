//! Render context assembly.
//!
//! A [`RenderContext`] is the flat record handed to the template engine for
//! one generation call. It is built fresh per call, never persisted, and is
//! purely an input to rendering.

use serde::Serialize;

use crate::domain::{
    casing::to_pascal_case,
    entities::{FieldSpec, ProjectTarget},
    value_objects::Orm,
};

/// Context for template rendering.
///
/// A **Value Object** containing all data needed to render a template.
/// Immutable after creation.
///
/// ## Template variables
///
/// | Variable | Example | Present |
/// |----------|---------|---------|
/// | `projectName` | "shop-api" | always |
/// | `projectNamePascal` | "ShopApi" | always |
/// | `moduleName` / `moduleNamePascal` | "billing" / "Billing" | module + resource flows |
/// | `resourceName` / `resourceNamePascal` | "invoice" / "Invoice" | resource flow |
/// | `orm` | "typeorm" | always |
/// | `database` | "postgres" | always |
/// | `fields` | `[{name, type, tsType, required, unique}]` | resource flow |
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
    pub project_name: String,
    pub project_name_pascal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name_pascal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name_pascal: Option<String>,
    pub orm: Orm,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldView>>,
}

/// Serialized view of one field, as templates see it.
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: &'static str,
    #[serde(rename = "tsType")]
    pub ts_type: &'static str,
    pub required: bool,
    pub unique: bool,
}

impl From<&FieldSpec> for FieldView {
    fn from(field: &FieldSpec) -> Self {
        Self {
            name: field.name().to_string(),
            field_type: field.field_type().as_str(),
            ts_type: field.field_type().ts_type(),
            required: field.required(),
            unique: field.unique(),
        }
    }
}

impl RenderContext {
    /// Context for the project creation flow.
    pub fn for_project(target: &ProjectTarget) -> Self {
        Self {
            project_name: target.name().to_string(),
            project_name_pascal: target.name_pascal(),
            module_name: None,
            module_name_pascal: None,
            resource_name: None,
            resource_name_pascal: None,
            orm: target.orm(),
            database: target.database().to_string(),
            fields: None,
        }
    }

    /// Context for the module creation flow.
    pub fn for_module(project_name: &str, module_name: &str, orm: Orm, database: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            project_name_pascal: to_pascal_case(project_name),
            module_name: Some(module_name.to_string()),
            module_name_pascal: Some(to_pascal_case(module_name)),
            resource_name: None,
            resource_name_pascal: None,
            orm,
            database: database.to_string(),
            fields: None,
        }
    }

    /// Context for the resource creation flow.
    pub fn for_resource(
        project_name: &str,
        module_name: &str,
        resource_name: &str,
        fields: &[FieldSpec],
        orm: Orm,
        database: &str,
    ) -> Self {
        Self {
            resource_name: Some(resource_name.to_string()),
            resource_name_pascal: Some(to_pascal_case(resource_name)),
            fields: Some(fields.iter().map(FieldView::from).collect()),
            ..Self::for_module(project_name, module_name, orm, database)
        }
    }
}
