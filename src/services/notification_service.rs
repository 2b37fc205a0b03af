//! Notification Service

use crate::client_error::ClientError;
use crate::services::base_service::BaseService;
use crate::tools::dtos::Response;
use crate::tools::options::SendOptions;
use crate::tools::routes::{Resource, Verb};
use crate::Client;
use std::sync::Arc;

/// Service for notification API endpoints.
pub struct NotificationService {
    client: Arc<Client>,
}

impl NotificationService {
    /// Creates a new NotificationService.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Sends a notification to users of a profile.
    pub async fn post_notifications(
        &self,
        profile_id: u64,
        body: serde_json::Value,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Post,
                Resource::Notifications,
                &[&profile_id],
                SendOptions::new().with_body(body),
            )
            .await
    }
}

impl BaseService for NotificationService {
    fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
