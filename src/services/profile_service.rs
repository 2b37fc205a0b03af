//! Profile Service

use crate::client_error::ClientError;
use crate::services::base_service::BaseService;
use crate::tools::dtos::Response;
use crate::tools::options::{ListOptions, SendOptions};
use crate::tools::routes::{Resource, Verb};
use crate::Client;
use std::sync::Arc;

/// Service for profile and company info API endpoints.
pub struct ProfileService {
    client: Arc<Client>,
}

impl ProfileService {
    /// Creates a new ProfileService.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    // ---------------------------------------------------------------
    // Profiles
    // ---------------------------------------------------------------

    /// Lists profiles.
    pub async fn get_profiles(
        &self,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Get, Resource::Profiles, &[], options.unwrap_or_default().into())
            .await
    }

    /// Retrieves a profile.
    pub async fn get_profile(&self, profile_id: u64) -> Result<Response, ClientError> {
        self.client.send(Verb::Get, Resource::Profile, &[&profile_id], SendOptions::new()).await
    }

    /// Retrieves the profile the token belongs to.
    pub async fn get_home_profile(&self) -> Result<Response, ClientError> {
        self.client.send(Verb::Get, Resource::HomeProfile, &[], SendOptions::new()).await
    }

    /// Creates a new profile.
    pub async fn post_profile(&self, body: serde_json::Value) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Post, Resource::Profiles, &[], SendOptions::new().with_body(body))
            .await
    }

    /// Updates a profile.
    pub async fn put_profile(
        &self,
        profile_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Put, Resource::Profile, &[&profile_id], SendOptions::new().with_body(body))
            .await
    }

    // ---------------------------------------------------------------
    // Company info
    // ---------------------------------------------------------------

    /// Retrieves the company info of a profile.
    pub async fn get_company_info(
        &self,
        profile_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::CompanyInfo,
                &[&profile_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Updates the company info of a profile.
    pub async fn put_company_info(
        &self,
        profile_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::CompanyInfo,
                &[&profile_id],
                SendOptions::new().with_body(body),
            )
            .await
    }
}

impl BaseService for ProfileService {
    fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
