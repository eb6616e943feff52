//! Identity provider and identity pool data models

use serde::{Deserialize, Serialize};

use crate::api::traits::ApiResource;
use crate::output::Tabular;

/// OIDC identity provider
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct IdentityProvider {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub jwks_uri: String,
}

impl ApiResource for IdentityProvider {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.display_name
    }
}

impl Tabular for IdentityProvider {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Description", "Issuer", "JWKS URI"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name.clone(),
            self.description.clone(),
            self.issuer.clone(),
            self.jwks_uri.clone(),
        ]
    }
}

/// Identity pool belonging to a provider
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct IdentityPool {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub identity_claim: String,
    #[serde(default)]
    pub filter: String,
}

impl ApiResource for IdentityPool {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.display_name
    }
}

impl Tabular for IdentityPool {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Description", "Identity Claim", "Filter"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name.clone(),
            self.description.clone(),
            self.identity_claim.clone(),
            self.filter.clone(),
        ]
    }
}

#[derive(Serialize, Debug)]
pub struct CreateIdentityPoolRequest<'a> {
    pub display_name: &'a str,
    pub description: &'a str,
    pub identity_claim: &'a str,
    pub filter: &'a str,
}
