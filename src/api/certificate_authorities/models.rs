//! Certificate authority data models

use serde::{Deserialize, Serialize};

use crate::api::traits::ApiResource;
use crate::output::Tabular;

/// Certificate authority trusted for mTLS client identities
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CertificateAuthority {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fingerprints: Vec<String>,
    #[serde(default)]
    pub expiration_dates: Vec<String>,
    #[serde(default)]
    pub state: String,
}

impl ApiResource for CertificateAuthority {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.display_name
    }
}

impl Tabular for CertificateAuthority {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Description", "Fingerprints", "Expiration Dates", "State"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name.clone(),
            self.description.clone(),
            self.fingerprints.join(", "),
            self.expiration_dates.join(", "),
            self.state.clone(),
        ]
    }
}
