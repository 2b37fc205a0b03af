//! Device License Service

use crate::client_error::ClientError;
use crate::services::base_service::BaseService;
use crate::tools::dtos::Response;
use crate::tools::options::{ListOptions, SendOptions};
use crate::tools::routes::{Resource, Verb};
use crate::Client;
use std::sync::Arc;

/// Service for device license API endpoints.
pub struct DeviceLicenseService {
    client: Arc<Client>,
}

impl DeviceLicenseService {
    /// Creates a new DeviceLicenseService.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Lists device licenses.
    pub async fn get_device_licenses(
        &self,
        profile_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::DeviceLicenses,
                &[&profile_id],
                options.unwrap_or_default().into(),
            )
            .await
    }

    /// Retrieves a device license.
    pub async fn get_device_license(
        &self,
        profile_id: u64,
        license_id: u64,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::DeviceLicense,
                &[&profile_id, &license_id],
                SendOptions::new(),
            )
            .await
    }
}

impl BaseService for DeviceLicenseService {
    fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
