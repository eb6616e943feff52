//! Role-binding display rows

use serde::Serialize;

use crate::output::Tabular;
use crate::rbac::RoleBinding;

/// A cloud role binding with the principal resolved to a name where known
#[derive(Serialize, Debug, Clone)]
pub struct RoleBindingRow {
    pub id: String,
    pub principal: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    pub role: String,
    pub crn_pattern: String,
}

impl RoleBindingRow {
    pub fn new(binding: &RoleBinding, name: &str, email: &str) -> Self {
        Self {
            id: binding.id.clone(),
            principal: binding.principal.clone(),
            name: name.to_string(),
            email: email.to_string(),
            role: binding.role_name.clone(),
            crn_pattern: binding.crn_pattern.clone(),
        }
    }
}

impl Tabular for RoleBindingRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "Principal", "Name", "Email", "Role", "CRN Pattern"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.principal.clone(),
            self.name.clone(),
            self.email.clone(),
            self.role.clone(),
            self.crn_pattern.clone(),
        ]
    }
}

/// Query filters for listing cloud role bindings
#[derive(Debug, Default)]
pub struct RoleBindingFilter<'a> {
    pub crn_pattern: &'a str,
    pub principal: Option<&'a str>,
    pub role_name: Option<&'a str>,
}
