//! Media Service

use crate::client_error::ClientError;
use crate::services::base_service::BaseService;
use crate::tools::dtos::Response;
use crate::tools::options::SendOptions;
use crate::tools::routes::{Resource, Verb};
use crate::Client;
use std::sync::Arc;

/// Service for private media API endpoints.
pub struct MediaService {
    client: Arc<Client>,
}

impl MediaService {
    /// Creates a new MediaService.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Downloads a private media file by its URL.
    pub async fn get_private_media(
        &self,
        profile_id: u64,
        media_url: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .send(
                Verb::Get,
                Resource::PrivateMedia,
                &[&profile_id],
                SendOptions::new().with_query("URL", media_url),
            )
            .await
    }
}

impl BaseService for MediaService {
    fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
