//! User Service

use crate::client_error::ClientError;
use crate::services::base_service::BaseService;
use crate::tools::dtos::Response;
use crate::tools::options::{ListOptions, SendOptions};
use crate::tools::routes::{Resource, Verb};
use crate::Client;
use std::sync::Arc;

/// Service for user API endpoints.
pub struct UserService {
    client: Arc<Client>,
}

impl UserService {
    /// Creates a new UserService.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    // ---------------------------------------------------------------
    // Users
    // ---------------------------------------------------------------

    /// Lists users.
    pub async fn get_users(
        &self,
        profile_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Get, Resource::Users, &[&profile_id], options.unwrap_or_default().into())
            .await
    }

    /// Retrieves a user.
    pub async fn get_user(&self, profile_id: u64, user_id: u64) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Get, Resource::User, &[&profile_id, &user_id], SendOptions::new())
            .await
    }

    /// Creates users.
    pub async fn post_users(
        &self,
        profile_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Post, Resource::Users, &[&profile_id], SendOptions::new().with_body(body))
            .await
    }

    /// Updates the users selected by `options`.
    pub async fn put_users(
        &self,
        profile_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client.send(Verb::Put, Resource::Users, &[&profile_id], options.with_body(body)).await
    }

    /// Updates a user.
    pub async fn put_user(
        &self,
        profile_id: u64,
        user_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::User,
                &[&profile_id, &user_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the users selected by `options`.
    pub async fn delete_users(
        &self,
        profile_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Delete, Resource::Users, &[&profile_id], options.unwrap_or_default().into())
            .await
    }

    /// Deletes a user.
    pub async fn delete_user(
        &self,
        profile_id: u64,
        user_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Delete, Resource::User, &[&profile_id, &user_id], SendOptions::new())
            .await
    }

    // ---------------------------------------------------------------
    // Page assignments
    // ---------------------------------------------------------------

    /// Lists page assignments of a user.
    pub async fn get_user_page_assignments(
        &self,
        profile_id: u64,
        user_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::UserPageAssignments,
                &[&profile_id, &user_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a page assignment of a user.
    pub async fn get_user_page_assignment(
        &self,
        profile_id: u64,
        user_id: u64,
        page_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::UserPageAssignment,
                &[&profile_id, &user_id, &page_id],
                SendOptions::new(),
            )
            .await
    }

    /// Creates page assignments of a user.
    pub async fn post_user_page_assignments(
        &self,
        profile_id: u64,
        user_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::UserPageAssignments,
                &[&profile_id, &user_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates the page assignments of a user selected by `options`.
    pub async fn put_user_page_assignments(
        &self,
        profile_id: u64,
        user_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client
            .send(
                Verb::Put,
                Resource::UserPageAssignments,
                &[&profile_id, &user_id],
                options.with_body(body),
            )
            .await
    }

    /// Updates a page assignment of a user.
    pub async fn put_user_page_assignment(
        &self,
        profile_id: u64,
        user_id: u64,
        page_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::UserPageAssignment,
                &[&profile_id, &user_id, &page_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the page assignments of a user selected by `options`.
    pub async fn delete_user_page_assignments(
        &self,
        profile_id: u64,
        user_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::UserPageAssignments,
                &[&profile_id, &user_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes a page assignment of a user.
    pub async fn delete_user_page_assignment(
        &self,
        profile_id: u64,
        user_id: u64,
        page_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::UserPageAssignment,
                &[&profile_id, &user_id, &page_id],
                SendOptions::new(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Record assignments
    // ---------------------------------------------------------------

    /// Lists record assignments of a user.
    pub async fn get_user_record_assignments(
        &self,
        profile_id: u64,
        user_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::UserRecordAssignments,
                &[&profile_id, &user_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a record assignment of a user.
    pub async fn get_user_record_assignment(
        &self,
        profile_id: u64,
        user_id: u64,
        record_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::UserRecordAssignment,
                &[&profile_id, &user_id, &record_id],
                SendOptions::new(),
            )
            .await
    }

    /// Creates record assignments of a user.
    pub async fn post_user_record_assignments(
        &self,
        profile_id: u64,
        user_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::UserRecordAssignments,
                &[&profile_id, &user_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the record assignments of a user selected by `options`.
    pub async fn delete_user_record_assignments(
        &self,
        profile_id: u64,
        user_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::UserRecordAssignments,
                &[&profile_id, &user_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes a record assignment of a user.
    pub async fn delete_user_record_assignment(
        &self,
        profile_id: u64,
        user_id: u64,
        record_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::UserRecordAssignment,
                &[&profile_id, &user_id, &record_id],
                SendOptions::new(),
            )
            .await
    }
}

impl BaseService for UserService {
    fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
