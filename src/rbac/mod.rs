//! Role-based access control: CRN patterns, principals, role catalog
//!
//! Cloud bindings are scoped by a CRN pattern; Platform bindings by an MDS
//! scope plus an optional resource pattern.

pub mod crn;
mod models;
pub mod options;
pub mod principal;
mod roles;

pub use crn::{build_crn_pattern, normalize_resource_type, parse_resource, ScopeFlags};
pub use models::{CreateRoleBindingRequest, PlatformRoleBinding, RoleBinding};
pub use options::{
    MdsScope, MdsScopeFlags, PatternType, ResourcePattern, ResourcesRequest, RoleBindingOptions,
};
pub use principal::validate_principal;
pub use roles::{Action, Policy, Role, RoleCatalog};
