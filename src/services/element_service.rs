//! Element Service

use crate::client_error::ClientError;
use crate::services::base_service::BaseService;
use crate::tools::dtos::Response;
use crate::tools::options::{ListOptions, SendOptions};
use crate::tools::routes::{Resource, Verb};
use crate::Client;
use std::sync::Arc;

/// Service for element (form field) API endpoints.
pub struct ElementService {
    client: Arc<Client>,
}

impl ElementService {
    /// Creates a new ElementService.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    // ---------------------------------------------------------------
    // Elements
    // ---------------------------------------------------------------

    /// Lists elements of a page.
    pub async fn get_elements(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::Elements,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves an element.
    pub async fn get_element(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::Element,
                &[&profile_id, &page_id, &element_id],
                SendOptions::new(),
            )
            .await
    }

    /// Copies an element.
    pub async fn copy_element(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Copy,
                Resource::Element,
                &[&profile_id, &page_id, &element_id],
                SendOptions::new(),
            )
            .await
    }

    /// Creates elements of a page.
    pub async fn post_elements(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::Elements,
                &[&profile_id, &page_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates the elements of a page selected by `options`.
    pub async fn put_elements(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client
            .send(Verb::Put, Resource::Elements, &[&profile_id, &page_id], options.with_body(body))
            .await
    }

    /// Updates an element.
    pub async fn put_element(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::Element,
                &[&profile_id, &page_id, &element_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the elements of a page selected by `options`.
    pub async fn delete_elements(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::Elements,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes an element.
    pub async fn delete_element(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::Element,
                &[&profile_id, &page_id, &element_id],
                SendOptions::new(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Localizations
    // ---------------------------------------------------------------

    /// Lists localizations of an element.
    pub async fn get_element_localizations(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::ElementLocalizations,
                &[&profile_id, &page_id, &element_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves an element localization.
    pub async fn get_element_localization(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        language_code: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::ElementLocalization,
                &[&profile_id, &page_id, &element_id, &language_code],
                SendOptions::new(),
            )
            .await
    }

    /// Creates localizations of an element.
    pub async fn post_element_localizations(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::ElementLocalizations,
                &[&profile_id, &page_id, &element_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates the localizations of an element selected by `options`.
    pub async fn put_element_localizations(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client
            .send(
                Verb::Put,
                Resource::ElementLocalizations,
                &[&profile_id, &page_id, &element_id],
                options.with_body(body),
            )
            .await
    }

    /// Updates an element localization.
    pub async fn put_element_localization(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        language_code: &str,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::ElementLocalization,
                &[&profile_id, &page_id, &element_id, &language_code],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the localizations of an element selected by `options`.
    pub async fn delete_element_localizations(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::ElementLocalizations,
                &[&profile_id, &page_id, &element_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes an element localization.
    pub async fn delete_element_localization(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        language_code: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::ElementLocalization,
                &[&profile_id, &page_id, &element_id, &language_code],
                SendOptions::new(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Dynamic attributes
    // ---------------------------------------------------------------

    /// Lists dynamic attributes of an element.
    pub async fn get_element_dynamic_attributes(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::ElementDynamicAttributes,
                &[&profile_id, &page_id, &element_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a dynamic attribute of an element.
    pub async fn get_element_dynamic_attribute(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        attribute_name: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::ElementDynamicAttribute,
                &[&profile_id, &page_id, &element_id, &attribute_name],
                SendOptions::new(),
            )
            .await
    }

    /// Creates dynamic attributes of an element.
    pub async fn post_element_dynamic_attributes(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::ElementDynamicAttributes,
                &[&profile_id, &page_id, &element_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates the dynamic attributes of an element selected by `options`.
    pub async fn put_element_dynamic_attributes(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client
            .send(
                Verb::Put,
                Resource::ElementDynamicAttributes,
                &[&profile_id, &page_id, &element_id],
                options.with_body(body),
            )
            .await
    }

    /// Updates a dynamic attribute of an element.
    pub async fn put_element_dynamic_attribute(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        attribute_name: &str,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::ElementDynamicAttribute,
                &[&profile_id, &page_id, &element_id, &attribute_name],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the dynamic attributes of an element selected by `options`.
    pub async fn delete_element_dynamic_attributes(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::ElementDynamicAttributes,
                &[&profile_id, &page_id, &element_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes a dynamic attribute of an element.
    pub async fn delete_element_dynamic_attribute(
        &self,
        profile_id: u64,
        page_id: u64,
        element_id: u64,
        attribute_name: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::ElementDynamicAttribute,
                &[&profile_id, &page_id, &element_id, &attribute_name],
                SendOptions::new(),
            )
            .await
    }
}

impl BaseService for ElementService {
    fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
