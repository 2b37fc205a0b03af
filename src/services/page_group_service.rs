//! Page Group Service

use crate::client_error::ClientError;
use crate::services::base_service::BaseService;
use crate::tools::dtos::Response;
use crate::tools::options::{ListOptions, SendOptions};
use crate::tools::routes::{Resource, Verb};
use crate::Client;
use std::sync::Arc;

/// Service for page group API endpoints.
pub struct PageGroupService {
    client: Arc<Client>,
}

impl PageGroupService {
    /// Creates a new PageGroupService.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    // ---------------------------------------------------------------
    // Page groups
    // ---------------------------------------------------------------

    /// Lists page groups.
    pub async fn get_page_groups(
        &self,
        profile_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageGroups,
                &[&profile_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a page group.
    pub async fn get_page_group(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Get, Resource::PageGroup, &[&profile_id, &pagegroup_id], SendOptions::new())
            .await
    }

    /// Creates page groups.
    pub async fn post_page_groups(
        &self,
        profile_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::PageGroups,
                &[&profile_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates a page group.
    pub async fn put_page_group(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::PageGroup,
                &[&profile_id, &pagegroup_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes a page group.
    pub async fn delete_page_group(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageGroup,
                &[&profile_id, &pagegroup_id],
                SendOptions::new(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Page assignments
    // ---------------------------------------------------------------

    /// Lists page assignments of a page group.
    pub async fn get_page_group_page_assignments(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageGroupPageAssignments,
                &[&profile_id, &pagegroup_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a page assignment of a page group.
    pub async fn get_page_group_page_assignment(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
        page_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageGroupPageAssignment,
                &[&profile_id, &pagegroup_id, &page_id],
                SendOptions::new(),
            )
            .await
    }

    /// Creates page assignments of a page group.
    pub async fn post_page_group_page_assignments(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::PageGroupPageAssignments,
                &[&profile_id, &pagegroup_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the page assignments of a page group selected by `options`.
    pub async fn delete_page_group_page_assignments(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageGroupPageAssignments,
                &[&profile_id, &pagegroup_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes a page assignment of a page group.
    pub async fn delete_page_group_page_assignment(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
        page_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageGroupPageAssignment,
                &[&profile_id, &pagegroup_id, &page_id],
                SendOptions::new(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // User assignments
    // ---------------------------------------------------------------

    /// Lists user assignments of a page group.
    pub async fn get_page_group_user_assignments(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageGroupUserAssignments,
                &[&profile_id, &pagegroup_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a user assignment of a page group.
    pub async fn get_page_group_user_assignment(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
        user_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageGroupUserAssignment,
                &[&profile_id, &pagegroup_id, &user_id],
                SendOptions::new(),
            )
            .await
    }

    /// Creates user assignments of a page group.
    pub async fn post_page_group_user_assignments(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::PageGroupUserAssignments,
                &[&profile_id, &pagegroup_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates the user assignments of a page group selected by `options`.
    pub async fn put_page_group_user_assignments(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client
            .send(
                Verb::Put,
                Resource::PageGroupUserAssignments,
                &[&profile_id, &pagegroup_id],
                options.with_body(body),
            )
            .await
    }

    /// Updates a user assignment of a page group.
    pub async fn put_page_group_user_assignment(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
        user_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::PageGroupUserAssignment,
                &[&profile_id, &pagegroup_id, &user_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the user assignments of a page group selected by `options`.
    pub async fn delete_page_group_user_assignments(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageGroupUserAssignments,
                &[&profile_id, &pagegroup_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes a user assignment of a page group.
    pub async fn delete_page_group_user_assignment(
        &self,
        profile_id: u64,
        pagegroup_id: u64,
        user_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageGroupUserAssignment,
                &[&profile_id, &pagegroup_id, &user_id],
                SendOptions::new(),
            )
            .await
    }
}

impl BaseService for PageGroupService {
    fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
