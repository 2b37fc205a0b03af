//! Zerion iFormBuilder Client

use crate::client_error::ClientError;
use crate::config::ClientConfig;
use crate::services::{
    DeviceLicenseService, ElementService, MediaService, NotificationService, OptionListService,
    PageGroupService, PageService, ProfileService, RecordService, UserGroupService, UserService,
};
use crate::stores::SessionStore;
use crate::tools::dtos::{decode_body, IfbResponse, Response, TokenResponse};
use crate::tools::jwt::{encode_assertion, AssertionClaims, JWT_BEARER_GRANT_TYPE};
use crate::tools::options::SendOptions;
use crate::tools::routes::{Operation, PathParam, Resource, Verb};
use chrono::{DateTime, Utc};
use reqwest::header::CONTENT_TYPE;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::instrument::WithSubscriber;
use tracing::Instrument;

/// Client for the iFormBuilder REST API.
///
/// Holds one persistent HTTP session, the bearer token and the request
/// counters. Share it as `Arc<Client>`; the service accessors need it.
pub struct Client {
    /// Validated construction parameters.
    config: ClientConfig,

    /// Token, expiration and counters.
    session: SessionStore,

    /// HTTP client for making requests.
    http_client: reqwest::Client,
}

impl Client {
    /// Creates a new client and immediately requests an access token.
    ///
    /// A failed token request does not fail construction: it is logged and
    /// kept for [`Client::take_auth_error`], and the client is returned
    /// without a token.
    pub async fn new(config: ClientConfig) -> Arc<Self> {
        let client = Arc::new(Self {
            config,
            session: SessionStore::new(),
            http_client: reqwest::Client::new(),
        });

        client
            .with_log_dispatch(client.authenticate_or_capture())
            .await;

        client
    }

    /// Validates the parameters and creates a new client in one call.
    pub async fn connect(
        server: &str,
        region: &str,
        client_key: &str,
        client_secret: &str,
        version: f64,
    ) -> Result<Arc<Self>, ClientError> {
        let config = ClientConfig::new(server, region, client_key, client_secret, version)?;
        Ok(Self::new(config).await)
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the base URL resource paths are appended to.
    pub fn host(&self) -> &str {
        self.config.host()
    }

    /// Returns the token endpoint URL.
    pub fn token_url(&self) -> &str {
        self.config.token_url()
    }

    /// Builds a full URL by safely concatenating the provided path to the host.
    pub fn build_url(&self, path: &str) -> String {
        let mut url = self.config.host().to_string();

        if !path.is_empty() {
            if !url.ends_with('/') {
                url.push('/');
            }
            url.push_str(path.strip_prefix('/').unwrap_or(path));
        }

        url
    }

    // ---------------------------------------------------------------
    // Introspection
    // ---------------------------------------------------------------

    /// Current access token, `None` if none was ever granted.
    pub fn access_token(&self) -> Option<String> {
        self.session.token()
    }

    /// Local expiration of the current access token.
    pub fn access_token_expiration(&self) -> Option<DateTime<Utc>> {
        self.session.expiration()
    }

    /// Number of completed API round trips, rate-limited attempts included.
    pub fn api_count(&self) -> u64 {
        self.session.api_calls()
    }

    /// Instant the client was created.
    pub fn start_time(&self) -> DateTime<Utc> {
        self.session.start_time()
    }

    /// Seconds since the client was created, rounded to two decimals.
    pub fn api_lifetime(&self) -> f64 {
        let elapsed = Utc::now() - self.session.start_time();
        (elapsed.num_milliseconds() as f64 / 10.0).round() / 100.0
    }

    /// Time the most recent API request took to receive its response head.
    pub fn last_execution_time(&self) -> Option<Duration> {
        self.session.last_execution_time()
    }

    /// Takes the last captured authentication failure, if any.
    pub fn take_auth_error(&self) -> Option<ClientError> {
        self.session.take_auth_error()
    }

    // ---------------------------------------------------------------
    // Services
    // ---------------------------------------------------------------

    /// Returns the ProfileService (profiles and company info).
    pub fn profiles(self: &Arc<Self>) -> ProfileService {
        ProfileService::new(Arc::clone(self))
    }

    /// Returns the UserService (users and their page/record assignments).
    pub fn users(self: &Arc<Self>) -> UserService {
        UserService::new(Arc::clone(self))
    }

    /// Returns the UserGroupService.
    pub fn user_groups(self: &Arc<Self>) -> UserGroupService {
        UserGroupService::new(Arc::clone(self))
    }

    /// Returns the PageService.
    pub fn pages(self: &Arc<Self>) -> PageService {
        PageService::new(Arc::clone(self))
    }

    /// Returns the PageGroupService.
    pub fn page_groups(self: &Arc<Self>) -> PageGroupService {
        PageGroupService::new(Arc::clone(self))
    }

    /// Returns the ElementService.
    pub fn elements(self: &Arc<Self>) -> ElementService {
        ElementService::new(Arc::clone(self))
    }

    /// Returns the OptionListService (option lists, options and their localizations).
    pub fn option_lists(self: &Arc<Self>) -> OptionListService {
        OptionListService::new(Arc::clone(self))
    }

    /// Returns the RecordService.
    pub fn records(self: &Arc<Self>) -> RecordService {
        RecordService::new(Arc::clone(self))
    }

    /// Returns the NotificationService.
    pub fn notifications(self: &Arc<Self>) -> NotificationService {
        NotificationService::new(Arc::clone(self))
    }

    /// Returns the MediaService.
    pub fn media(self: &Arc<Self>) -> MediaService {
        MediaService::new(Arc::clone(self))
    }

    /// Returns the DeviceLicenseService.
    pub fn device_licenses(self: &Arc<Self>) -> DeviceLicenseService {
        DeviceLicenseService::new(Arc::clone(self))
    }

    // ---------------------------------------------------------------
    // Authentication
    // ---------------------------------------------------------------

    /// Requests a new access token through the JWT-bearer exchange.
    pub async fn authenticate(&self) -> Result<(), ClientError> {
        self.with_log_dispatch(self.request_access_token()).await
    }

    async fn authenticate_or_capture(&self) {
        if let Err(err) = self.request_access_token().await {
            tracing::warn!(
                error = %err,
                token_url = self.config.token_url(),
                "token request failed, client is not authenticated"
            );
            self.session.set_auth_error(err);
        }
    }

    async fn request_access_token(&self) -> Result<(), ClientError> {
        let claims = AssertionClaims::new(
            self.config.client_key(),
            self.config.token_url(),
            Utc::now(),
            self.config.refresh.assertion_window(),
        );
        let assertion = encode_assertion(&claims, self.config.client_secret())?;

        let response = self
            .http_client
            .post(self.config.token_url())
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .timeout(self.config.refresh.request_timeout)
            .send()
            .await
            .map_err(|e| ClientError::authentication(None, e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::authentication(Some(status), text));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::authentication(Some(status), e.to_string()))?;
        let body: serde_json::Value = serde_json::from_str(&text)?;

        let access_token = TokenResponse::from_value(&body)
            .access_token
            .ok_or(ClientError::AccessTokenNotGranted)?;

        let expiration = self.config.refresh.expiration_from(Utc::now());
        self.session.save_token(&access_token, expiration);
        self.session.clear_auth_error();

        tracing::info!(%expiration, "access token granted");
        Ok(())
    }

    // ---------------------------------------------------------------
    // Dispatch
    // ---------------------------------------------------------------

    /// Sends an API request by operation name, e.g. `"getUserPageAssignment"`.
    ///
    /// The name is split into its leading lowercase verb and the resource
    /// name, which is looked up in the routing table.
    pub async fn call(
        &self,
        operation: &str,
        ids: &[PathParam<'_>],
        options: SendOptions,
    ) -> Result<Response, ClientError> {
        let operation: Operation = operation.parse()?;
        self.send(operation.verb, operation.resource, ids, options)
            .await
    }

    /// Sends an API request.
    ///
    /// `ids` are substituted in order into the resource's path template.
    /// Rate-limited responses are retried according to the retry policy
    /// unless the client skips rate limit retries; every other status is
    /// returned as-is.
    pub async fn send(
        &self,
        verb: Verb,
        resource: Resource,
        ids: &[PathParam<'_>],
        options: SendOptions,
    ) -> Result<Response, ClientError> {
        let operation = Operation::new(verb, resource);
        let path = resource.render(ids)?;
        let span = tracing::debug_span!("request", %operation, path = %path);

        self.with_log_dispatch(self.dispatch(operation, path, options).instrument(span))
            .await
    }

    async fn dispatch(
        &self,
        operation: Operation,
        path: String,
        options: SendOptions,
    ) -> Result<Response, ClientError> {
        let url = self.build_url(&path);

        if self.session.needs_refresh(Utc::now()) {
            tracing::info!("access token expired, requesting a new one");
            self.request_access_token().await?;
        }

        let query = options.query_pairs();
        let mut retries = 0u32;

        loop {
            let mut request_builder = self
                .http_client
                .request(operation.verb.method(), &url)
                .header(CONTENT_TYPE, "application/json");

            if !query.is_empty() {
                request_builder = request_builder.query(&query);
            }
            if let Some(token) = self.session.token() {
                request_builder = request_builder.bearer_auth(token);
            }
            if let Some(body) = &options.body {
                request_builder = request_builder.json(body);
            }

            let started = Instant::now();
            let response = request_builder.send().await?;
            let elapsed = started.elapsed();
            self.session.record_request(elapsed);

            let status = response.status().as_u16();
            let headers = response.headers().clone();
            tracing::debug!(status, ?elapsed, "response received");
            let text = response.text().await?;

            if !self.config.skip_rate_limit_retry && self.config.retry.should_retry(status, retries) {
                tracing::warn!(
                    delay = ?self.config.retry.delay,
                    retries,
                    "request rate limited, waiting then retrying"
                );
                tokio::time::sleep(self.config.retry.delay).await;
                retries += 1;
                continue;
            }

            let body = decode_body(&text);
            return Ok(if self.config.simple_response {
                Response::Body(body)
            } else {
                Response::Full(IfbResponse::new(headers, status, body))
            });
        }
    }

    /// Runs the future under the caller-supplied log dispatcher, if any.
    async fn with_log_dispatch<F: Future>(&self, future: F) -> F::Output {
        match &self.config.log_dispatch {
            Some(dispatch) => future.with_subscriber(dispatch.clone()).await,
            None => future.await,
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("host", &self.config.host())
            .field("token_url", &self.config.token_url())
            .field("authenticated", &self.session.token().is_some())
            .field("api_calls", &self.session.api_calls())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> Client {
        let config = ClientConfig::new("acme", "us", "ck", "cs", 8.0).unwrap();
        Client {
            config,
            session: SessionStore::new(),
            http_client: reqwest::Client::new(),
        }
    }

    #[test]
    fn test_build_url() {
        let client = offline_client();
        assert_eq!(
            client.build_url("profiles/1/users"),
            "https://api.iformbuilder.com/exzact/api/v80/acme/profiles/1/users"
        );
        assert_eq!(
            client.build_url("/profiles/self"),
            "https://api.iformbuilder.com/exzact/api/v80/acme/profiles/self"
        );
    }

    #[test]
    fn test_fresh_client_state() {
        let client = offline_client();
        assert!(client.access_token().is_none());
        assert!(client.access_token_expiration().is_none());
        assert_eq!(client.api_count(), 0);
        assert!(client.last_execution_time().is_none());
        assert!(client.api_lifetime() >= 0.0);
        assert!(client.take_auth_error().is_none());
    }

    #[test]
    fn test_debug_hides_secret() {
        let client = offline_client();
        let debug = format!("{:?} {:?}", client, client.config());
        assert!(!debug.contains("\"cs\""));
        assert!(debug.contains("acme"));
    }
}
