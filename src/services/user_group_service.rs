//! User Group Service

use crate::client_error::ClientError;
use crate::services::base_service::BaseService;
use crate::tools::dtos::Response;
use crate::tools::options::{ListOptions, SendOptions};
use crate::tools::routes::{Resource, Verb};
use crate::Client;
use std::sync::Arc;

/// Service for user group API endpoints.
pub struct UserGroupService {
    client: Arc<Client>,
}

impl UserGroupService {
    /// Creates a new UserGroupService.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    // ---------------------------------------------------------------
    // User groups
    // ---------------------------------------------------------------

    /// Lists user groups.
    pub async fn get_user_groups(
        &self,
        profile_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::UserGroups,
                &[&profile_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a user group.
    pub async fn get_user_group(
        &self,
        profile_id: u64,
        usergroup_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Get, Resource::UserGroup, &[&profile_id, &usergroup_id], SendOptions::new())
            .await
    }

    /// Creates user groups.
    pub async fn post_user_groups(
        &self,
        profile_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::UserGroups,
                &[&profile_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates a user group.
    pub async fn put_user_group(
        &self,
        profile_id: u64,
        usergroup_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::UserGroup,
                &[&profile_id, &usergroup_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes a user group.
    pub async fn delete_user_group(
        &self,
        profile_id: u64,
        usergroup_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::UserGroup,
                &[&profile_id, &usergroup_id],
                SendOptions::new(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // User assignments
    // ---------------------------------------------------------------

    /// Lists user assignments of a user group.
    pub async fn get_user_group_user_assignments(
        &self,
        profile_id: u64,
        usergroup_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::UserGroupUserAssignments,
                &[&profile_id, &usergroup_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a user assignment of a user group.
    pub async fn get_user_group_user_assignment(
        &self,
        profile_id: u64,
        usergroup_id: u64,
        user_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::UserGroupUserAssignment,
                &[&profile_id, &usergroup_id, &user_id],
                SendOptions::new(),
            )
            .await
    }

    /// Creates user assignments of a user group.
    pub async fn post_user_group_user_assignments(
        &self,
        profile_id: u64,
        usergroup_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::UserGroupUserAssignments,
                &[&profile_id, &usergroup_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the user assignments of a user group selected by `options`.
    pub async fn delete_user_group_user_assignments(
        &self,
        profile_id: u64,
        usergroup_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::UserGroupUserAssignments,
                &[&profile_id, &usergroup_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes a user assignment of a user group.
    pub async fn delete_user_group_user_assignment(
        &self,
        profile_id: u64,
        usergroup_id: u64,
        user_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::UserGroupUserAssignment,
                &[&profile_id, &usergroup_id, &user_id],
                SendOptions::new(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Page assignments
    // ---------------------------------------------------------------

    /// Lists page assignments of a user group.
    pub async fn get_user_group_page_assignments(
        &self,
        profile_id: u64,
        usergroup_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::UserGroupPageAssignments,
                &[&profile_id, &usergroup_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a page assignment of a user group.
    pub async fn get_user_group_page_assignment(
        &self,
        profile_id: u64,
        usergroup_id: u64,
        page_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::UserGroupPageAssignment,
                &[&profile_id, &usergroup_id, &page_id],
                SendOptions::new(),
            )
            .await
    }

    /// Creates page assignments of a user group.
    pub async fn post_user_group_page_assignments(
        &self,
        profile_id: u64,
        usergroup_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::UserGroupPageAssignments,
                &[&profile_id, &usergroup_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates the page assignments of a user group selected by `options`.
    pub async fn put_user_group_page_assignments(
        &self,
        profile_id: u64,
        usergroup_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client
            .send(
                Verb::Put,
                Resource::UserGroupPageAssignments,
                &[&profile_id, &usergroup_id],
                options.with_body(body),
            )
            .await
    }

    /// Updates a page assignment of a user group.
    pub async fn put_user_group_page_assignment(
        &self,
        profile_id: u64,
        usergroup_id: u64,
        page_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::UserGroupPageAssignment,
                &[&profile_id, &usergroup_id, &page_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the page assignments of a user group selected by `options`.
    pub async fn delete_user_group_page_assignments(
        &self,
        profile_id: u64,
        usergroup_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::UserGroupPageAssignments,
                &[&profile_id, &usergroup_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes a page assignment of a user group.
    pub async fn delete_user_group_page_assignment(
        &self,
        profile_id: u64,
        usergroup_id: u64,
        page_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::UserGroupPageAssignment,
                &[&profile_id, &usergroup_id, &page_id],
                SendOptions::new(),
            )
            .await
    }
}

impl BaseService for UserGroupService {
    fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
