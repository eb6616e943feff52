//! User and invitation data models

use serde::{Deserialize, Serialize};

use crate::api::traits::ApiResource;
use crate::output::Tabular;

/// User from the IAM v2 API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub auth_type: String,
}

impl ApiResource for User {
    fn id(&self) -> &str {
        &self.id
    }

    /// Users confirm deletion by email
    fn name(&self) -> &str {
        &self.email
    }
}

impl Tabular for User {
    fn headers() -> &'static [&'static str] {
        &["ID", "Email", "Name", "Authentication Method"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.email.clone(),
            self.full_name.clone(),
            self.auth_type.clone(),
        ]
    }
}

/// Pending invitation
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Invitation {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub status: String,
}

impl Tabular for Invitation {
    fn headers() -> &'static [&'static str] {
        &["ID", "Email", "Status"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.id.clone(), self.email.clone(), self.status.clone()]
    }
}

#[derive(Serialize, Debug)]
pub struct CreateInvitationRequest<'a> {
    pub email: &'a str,
}
