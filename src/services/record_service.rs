//! Record Service

use crate::client_error::ClientError;
use crate::services::base_service::BaseService;
use crate::tools::dtos::Response;
use crate::tools::options::{ListOptions, SendOptions};
use crate::tools::routes::{Resource, Verb};
use crate::Client;
use std::sync::Arc;

/// Service for record (form submission) API endpoints.
pub struct RecordService {
    client: Arc<Client>,
}

impl RecordService {
    /// Creates a new RecordService.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    // ---------------------------------------------------------------
    // Records
    // ---------------------------------------------------------------

    /// Lists records of a page.
    pub async fn get_records(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::Records,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a record.
    pub async fn get_record(
        &self,
        profile_id: u64,
        page_id: u64,
        record_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::Record,
                &[&profile_id, &page_id, &record_id],
                SendOptions::new(),
            )
            .await
    }

    /// Copies a record.
    pub async fn copy_record(
        &self,
        profile_id: u64,
        page_id: u64,
        record_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Copy,
                Resource::Record,
                &[&profile_id, &page_id, &record_id],
                SendOptions::new(),
            )
            .await
    }

    /// Creates records of a page.
    pub async fn post_records(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::Records,
                &[&profile_id, &page_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Updates the records of a page selected by `options`.
    pub async fn put_records(
        &self,
        profile_id: u64,
        page_id: u64,
        body: serde_json::Value,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        let options: SendOptions = options.unwrap_or_default().into();
        self.client
            .send(Verb::Put, Resource::Records, &[&profile_id, &page_id], options.with_body(body))
            .await
    }

    /// Updates a record.
    pub async fn put_record(
        &self,
        profile_id: u64,
        page_id: u64,
        record_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Put,
                Resource::Record,
                &[&profile_id, &page_id, &record_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the records of a page selected by `options`.
    pub async fn delete_records(
        &self,
        profile_id: u64,
        page_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::Records,
                &[&profile_id, &page_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes a record.
    pub async fn delete_record(
        &self,
        profile_id: u64,
        page_id: u64,
        record_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::Record,
                &[&profile_id, &page_id, &record_id],
                SendOptions::new(),
            )
            .await
    }

    // ---------------------------------------------------------------
    // Assignments
    // ---------------------------------------------------------------

    /// Lists assignments of a record.
    pub async fn get_record_assignments(
        &self,
        profile_id: u64,
        page_id: u64,
        record_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::RecordAssignments,
                &[&profile_id, &page_id, &record_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves an assignment of a record.
    pub async fn get_record_assignment(
        &self,
        profile_id: u64,
        page_id: u64,
        record_id: u64,
        assignment_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::RecordAssignment,
                &[&profile_id, &page_id, &record_id, &assignment_id],
                SendOptions::new(),
            )
            .await
    }

    /// Creates assignments of a record.
    pub async fn post_record_assignments(
        &self,
        profile_id: u64,
        page_id: u64,
        record_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::RecordAssignments,
                &[&profile_id, &page_id, &record_id],
                SendOptions::new().with_body(body),
            )
            .await
    }

    /// Deletes the assignments of a record selected by `options`.
    pub async fn delete_record_assignments(
        &self,
        profile_id: u64,
        page_id: u64,
        record_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::RecordAssignments,
                &[&profile_id, &page_id, &record_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Deletes an assignment of a record.
    pub async fn delete_record_assignment(
        &self,
        profile_id: u64,
        page_id: u64,
        record_id: u64,
        assignment_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Delete,
                Resource::RecordAssignment,
                &[&profile_id, &page_id, &record_id, &assignment_id],
                SendOptions::new(),
            )
            .await
    }
}

impl BaseService for RecordService {
    fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
