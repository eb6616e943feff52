//! User API operations

use log::debug;

use crate::api::ConfluentClient;
use crate::config::api;
use crate::error::Result;

use super::models::{CreateInvitationRequest, Invitation, User};

impl ConfluentClient {
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.fetch_all_pages(api::USERS, "list users").await
    }

    pub async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let path = format!("{}/{}", api::USERS, urlencoding::encode(id));
        self.fetch_resource_by_path(&path, &format!("describe user \"{}\"", id))
            .await
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        let path = format!("{}/{}", api::USERS, urlencoding::encode(id));
        self.delete_by_path(&path, &format!("user \"{}\"", id)).await
    }

    /// Invite a user to the organization by email
    pub async fn invite_user(&self, email: &str) -> Result<Invitation> {
        let url = self.url(api::INVITATIONS);
        debug!("Inviting {}", email);
        let response = self
            .post(&url)
            .json(&CreateInvitationRequest { email })
            .send()
            .await?;
        self.parse_api_response(response, &format!("invite \"{}\"", email))
            .await
    }
}
