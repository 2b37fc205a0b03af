//! Option List Service

use crate::client_error::ClientError;
use crate::services::base_service::BaseService;
use crate::tools::dtos::Response;
use crate::tools::options::{ListOptions, SendOptions};
use crate::tools::routes::{Resource, Verb};
use crate::Client;
use std::sync::Arc;

/// Service for option list, option and option localization API endpoints.
pub struct OptionListService {
    client: Arc<Client>,
}

impl OptionListService {
    /// Creates a new OptionListService.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    // ---------------------------------------------------------------
    // Option lists
    // ---------------------------------------------------------------

    /// Lists option lists.
    pub async fn get_option_lists(
        &self,
        profile_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::OptionLists,
                &[&profile_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves an option list.
    pub async fn get_option_list(
        &self,
        profile_id: u64,
        optionlist_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::OptionList,
                &[&profile_id, &optionlist_id],
                SendOptions::new(),
            )
            .await
    }

    /// Copies an option list.
    pub async fn copy_option_list(
        &self,
        profile_id: u64,
        optionlist_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Copy,
                Resource::OptionList,
                &[&profile_id, &optionlist_id],
                SendOptions::new(),
            )
            .await
    }

    /// Creates option lists.
    pub async fn post_option_lists(
        &self,
        profile_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::OptionLists,
                &[&profile_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates an option list.
    pub async fn put_option_list(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::OptionList,
                &[&profile_id, &optionlist_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes an option list.
    pub async fn delete_option_list(
        &self,
        profile_id: u64,
        optionlist_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::OptionList,
                &[&profile_id, &optionlist_id],
                SendOptions::new(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Options
    // ---------------------------------------------------------------

    /// Lists options of an option list.
    pub async fn get_options(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::Options,
                &[&profile_id, &optionlist_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves an option.
    pub async fn get_option(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        option_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::Option,
                &[&profile_id, &optionlist_id, &option_id],
                SendOptions::new(),
            )
            .await
    }

    /// Creates options of an option list.
    pub async fn post_options(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::Options,
                &[&profile_id, &optionlist_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates the options of an option list selected by `options`.
    pub async fn put_options(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client
            .send(
                Verb::Put,
                Resource::Options,
                &[&profile_id, &optionlist_id],
                options.with_body(body),
            )
            .await
    }

    /// Updates an option.
    pub async fn put_option(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        option_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::Option,
                &[&profile_id, &optionlist_id, &option_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the options of an option list selected by `options`.
    pub async fn delete_options(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::Options,
                &[&profile_id, &optionlist_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes an option.
    pub async fn delete_option(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        option_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::Option,
                &[&profile_id, &optionlist_id, &option_id],
                SendOptions::new(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Option localizations
    // ---------------------------------------------------------------

    /// Lists localizations of an option.
    pub async fn get_option_localizations(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        option_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::OptionLocalizations,
                &[&profile_id, &optionlist_id, &option_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves an option localization.
    pub async fn get_option_localization(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        option_id: u64,
        language_code: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::OptionLocalization,
                &[&profile_id, &optionlist_id, &option_id, &language_code],
                SendOptions::new(),
            )
            .await
    }

    /// Creates localizations of an option.
    pub async fn post_option_localizations(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        option_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::OptionLocalizations,
                &[&profile_id, &optionlist_id, &option_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates the localizations of an option selected by `options`.
    pub async fn put_option_localizations(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        option_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client
            .send(
                Verb::Put,
                Resource::OptionLocalizations,
                &[&profile_id, &optionlist_id, &option_id],
                options.with_body(body),
            )
            .await
    }

    /// Updates an option localization.
    pub async fn put_option_localization(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        option_id: u64,
        language_code: &str,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::OptionLocalization,
                &[&profile_id, &optionlist_id, &option_id, &language_code],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the localizations of an option selected by `options`.
    pub async fn delete_option_localizations(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        option_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::OptionLocalizations,
                &[&profile_id, &optionlist_id, &option_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes an option localization.
    pub async fn delete_option_localization(
        &self,
        profile_id: u64,
        optionlist_id: u64,
        option_id: u64,
        language_code: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::OptionLocalization,
                &[&profile_id, &optionlist_id, &option_id, &language_code],
                SendOptions::new(),
            )
            .await
    }
}

impl BaseService for OptionListService {
    fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
