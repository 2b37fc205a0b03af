//! Page Service

use crate::client_error::ClientError;
use crate::services::base_service::BaseService;
use crate::tools::dtos::Response;
use crate::tools::options::{ListOptions, SendOptions};
use crate::tools::routes::{Resource, Verb};
use crate::Client;
use std::sync::Arc;

/// Service for page (form) API endpoints.
pub struct PageService {
    client: Arc<Client>,
}

impl PageService {
    /// Creates a new PageService.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    // ---------------------------------------------------------------
    // Pages
    // ---------------------------------------------------------------

    /// Lists pages.
    pub async fn get_pages(
        &self,
        profile_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Get, Resource::Pages, &[&profile_id], options.unwrap_or_default().into())
            .await
    }

    /// Retrieves a page.
    pub async fn get_page(&self, profile_id: u64, page_id: u64) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Get, Resource::Page, &[&profile_id, &page_id], SendOptions::new())
            .await
    }

    /// Copies a page.
    pub async fn copy_page(&self, profile_id: u64, page_id: u64) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Copy, Resource::Page, &[&profile_id, &page_id], SendOptions::new())
            .await
    }

    /// Creates pages.
    pub async fn post_pages(
        &self,
        profile_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Post, Resource::Pages, &[&profile_id], SendOptions::new().with_body(body))
            .await
    }

    /// Updates a page.
    pub async fn put_page(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::Page,
                &[&profile_id, &page_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes a page.
    pub async fn delete_page(
        &self,
        profile_id: u64,
        page_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(Verb::Delete, Resource::Page, &[&profile_id, &page_id], SendOptions::new())
            .await
    }

    // ---------------------------------------------------------------
    // Feed
    // ---------------------------------------------------------------

    /// Retrieves the feed of a page.
    pub async fn get_page_feed(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageFeed,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Localizations
    // ---------------------------------------------------------------

    /// Lists localizations of a page.
    pub async fn get_page_localizations(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageLocalizations,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a page localization.
    pub async fn get_page_localization(
        &self,
        profile_id: u64,
        page_id: u64,
        language_code: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageLocalization,
                &[&profile_id, &page_id, &language_code],
                SendOptions::new(),
            )
            .await
    }

    /// Creates localizations of a page.
    pub async fn post_page_localizations(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::PageLocalizations,
                &[&profile_id, &page_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates the localizations of a page selected by `options`.
    pub async fn put_page_localizations(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client
            .send(
                Verb::Put,
                Resource::PageLocalizations,
                &[&profile_id, &page_id],
                options.with_body(body),
            )
            .await
    }

    /// Updates a page localization.
    pub async fn put_page_localization(
        &self,
        profile_id: u64,
        page_id: u64,
        language_code: &str,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::PageLocalization,
                &[&profile_id, &page_id, &language_code],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the localizations of a page selected by `options`.
    pub async fn delete_page_localizations(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageLocalizations,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes a page localization.
    pub async fn delete_page_localization(
        &self,
        profile_id: u64,
        page_id: u64,
        language_code: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageLocalization,
                &[&profile_id, &page_id, &language_code],
                SendOptions::new(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // User assignments
    // ---------------------------------------------------------------

    /// Lists user assignments of a page.
    pub async fn get_page_user_assignments(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageUserAssignments,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a user assignment of a page.
    pub async fn get_page_user_assignment(
        &self,
        profile_id: u64,
        page_id: u64,
        user_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageUserAssignment,
                &[&profile_id, &page_id, &user_id],
                SendOptions::new(),
            )
            .await
    }

    /// Creates user assignments of a page.
    pub async fn post_page_user_assignments(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::PageUserAssignments,
                &[&profile_id, &page_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates the user assignments of a page selected by `options`.
    pub async fn put_page_user_assignments(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client
            .send(
                Verb::Put,
                Resource::PageUserAssignments,
                &[&profile_id, &page_id],
                options.with_body(body),
            )
            .await
    }

    /// Updates a user assignment of a page.
    pub async fn put_page_user_assignment(
        &self,
        profile_id: u64,
        page_id: u64,
        user_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::PageUserAssignment,
                &[&profile_id, &page_id, &user_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the user assignments of a page selected by `options`.
    pub async fn delete_page_user_assignments(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageUserAssignments,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes a user assignment of a page.
    pub async fn delete_page_user_assignment(
        &self,
        profile_id: u64,
        page_id: u64,
        user_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageUserAssignment,
                &[&profile_id, &page_id, &user_id],
                SendOptions::new(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Record assignments
    // ---------------------------------------------------------------

    /// Lists record assignments of a page.
    pub async fn get_page_record_assignments(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageRecordAssignments,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes the record assignments of a page selected by `options`.
    pub async fn delete_page_record_assignments(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageRecordAssignments,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // HTTP callback endpoints
    // ---------------------------------------------------------------

    /// Lists HTTP callback endpoints of a page.
    pub async fn get_page_endpoints(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageEndpoints,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves an HTTP callback endpoint of a page.
    pub async fn get_page_endpoint(
        &self,
        profile_id: u64,
        page_id: u64,
        endpoint_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageEndpoint,
                &[&profile_id, &page_id, &endpoint_id],
                SendOptions::new(),
            )
            .await
    }

    /// Creates HTTP callback endpoints of a page.
    pub async fn post_page_endpoints(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::PageEndpoints,
                &[&profile_id, &page_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates an HTTP callback endpoint of a page.
    pub async fn put_page_endpoint(
        &self,
        profile_id: u64,
        page_id: u64,
        endpoint_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::PageEndpoint,
                &[&profile_id, &page_id, &endpoint_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the HTTP callback endpoints of a page selected by `options`.
    pub async fn delete_page_endpoints(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageEndpoints,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes an HTTP callback endpoint of a page.
    pub async fn delete_page_endpoint(
        &self,
        profile_id: u64,
        page_id: u64,
        endpoint_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageEndpoint,
                &[&profile_id, &page_id, &endpoint_id],
                SendOptions::new(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Email alerts
    // ---------------------------------------------------------------

    /// Lists email alerts of a page.
    pub async fn get_page_email_alerts(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageEmailAlerts,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Creates email alerts of a page.
    pub async fn post_page_email_alerts(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::PageEmailAlerts,
                &[&profile_id, &page_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the email alerts of a page selected by `options`.
    pub async fn delete_page_email_alerts(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageEmailAlerts,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Trigger posts
    // ---------------------------------------------------------------

    /// Re-sends page records to the page's HTTP callback endpoints.
    pub async fn post_page_trigger_post(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::PageTriggerPost,
                &[&profile_id, &page_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Shares
    // ---------------------------------------------------------------

    /// Retrieves the profiles a page is shared with.
    pub async fn get_page_shares(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageShares,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Shares a page with other profiles.
    pub async fn post_page_shares(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::PageShares,
                &[&profile_id, &page_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates the sharing settings of a page.
    pub async fn put_page_shares(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client
            .send(
                Verb::Put,
                Resource::PageShares,
                &[&profile_id, &page_id],
                options.with_body(body),
            )
            .await
    }

    /// Stops sharing a page.
    pub async fn delete_page_shares(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageShares,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Dynamic attributes
    // ---------------------------------------------------------------

    /// Lists dynamic attributes of a page.
    pub async fn get_page_dynamic_attributes(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageDynamicAttributes,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a dynamic attribute of a page.
    pub async fn get_page_dynamic_attribute(
        &self,
        profile_id: u64,
        page_id: u64,
        attribute_name: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PageDynamicAttribute,
                &[&profile_id, &page_id, &attribute_name],
                SendOptions::new(),
            )
            .await
    }

    /// Creates dynamic attributes of a page.
    pub async fn post_page_dynamic_attributes(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::PageDynamicAttributes,
                &[&profile_id, &page_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates the dynamic attributes of a page selected by `options`.
    pub async fn put_page_dynamic_attributes(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client
            .send(
                Verb::Put,
                Resource::PageDynamicAttributes,
                &[&profile_id, &page_id],
                options.with_body(body),
            )
            .await
    }

    /// Updates a dynamic attribute of a page.
    pub async fn put_page_dynamic_attribute(
        &self,
        profile_id: u64,
        page_id: u64,
        attribute_name: &str,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::PageDynamicAttribute,
                &[&profile_id, &page_id, &attribute_name],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the dynamic attributes of a page selected by `options`.
    pub async fn delete_page_dynamic_attributes(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageDynamicAttributes,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes a dynamic attribute of a page.
    pub async fn delete_page_dynamic_attribute(
        &self,
        profile_id: u64,
        page_id: u64,
        attribute_name: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::PageDynamicAttribute,
                &[&profile_id, &page_id, &attribute_name],
                SendOptions::new(),
            )
            .await
    }
}

impl BaseService for PageService {
    fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
