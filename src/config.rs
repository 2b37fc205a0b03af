//! Client configuration
//!
//! Construction parameters are validated once, here, and are immutable for
//! the lifetime of a [`Client`](crate::Client).

use crate::client_error::ClientError;
use crate::tools::refresh::AutoRefreshConfig;
use crate::tools::retry::RetryPolicy;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Hosting region of an iFormBuilder server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Us,
    Uk,
    Au,
    Hipaa,
    Qa,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Uk => "uk",
            Region::Au => "au",
            Region::Hipaa => "hipaa",
            Region::Qa => "qa",
        }
    }

    /// Host prefix of the multi-region API (`us` has none).
    fn host_prefix(&self) -> String {
        match self {
            Region::Us => String::new(),
            other => format!("{}-", other.as_str()),
        }
    }
}

impl FromStr for Region {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "us" => Ok(Region::Us),
            "uk" => Ok(Region::Uk),
            "au" => Ok(Region::Au),
            "hipaa" => Ok(Region::Hipaa),
            "qa" => Ok(Region::Qa),
            other => Err(ClientError::InvalidRegion(other.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Major version of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V6,
    V8,
    V8_1,
}

impl ApiVersion {
    /// Returns the numeric version.
    pub fn as_f64(&self) -> f64 {
        match self {
            ApiVersion::V6 => 6.0,
            ApiVersion::V8 => 8.0,
            ApiVersion::V8_1 => 8.1,
        }
    }

    /// URL path segment of the version (`v60`, `v80`, `v81`).
    pub fn path_segment(&self) -> &'static str {
        match self {
            ApiVersion::V6 => "v60",
            ApiVersion::V8 => "v80",
            ApiVersion::V8_1 => "v81",
        }
    }

    /// Versions 8 and above are served from the multi-region host.
    pub fn is_multi_region(&self) -> bool {
        !matches!(self, ApiVersion::V6)
    }
}

impl TryFrom<f64> for ApiVersion {
    type Error = ClientError;

    fn try_from(version: f64) -> Result<Self, Self::Error> {
        if version == 6.0 {
            Ok(ApiVersion::V6)
        } else if version == 8.0 {
            Ok(ApiVersion::V8)
        } else if version == 8.1 {
            Ok(ApiVersion::V8_1)
        } else {
            Err(ClientError::InvalidVersion(version))
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

const ZIM_TOKEN_URL: &str = "https://identity.zerionsoftware.com/oauth2/token";
const ZIM_QA_TOKEN_URL: &str = "https://qa-identity.zerionsoftware.com/oauth2/token";

/// Resource host and token endpoint of a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Base URL every resource path is appended to.
    pub host: String,
    /// URL of the JWT-bearer token exchange.
    pub token_url: String,
}

impl Endpoints {
    /// Selects the host and token endpoint for the given server.
    ///
    /// A client key containing `.` is a Zerion Identity (ZIM) credential and
    /// authenticates against the identity provider instead of the server.
    pub fn resolve(server: &str, region: Region, version: ApiVersion, client_key: &str) -> Self {
        let mut endpoints = if version.is_multi_region() {
            let host = format!(
                "https://{}api.iformbuilder.com/exzact/api/{}/{}",
                region.host_prefix(),
                version.path_segment(),
                server
            );
            let token_url = format!("{}/oauth/token", host);
            Self { host, token_url }
        } else {
            Self {
                host: format!("https://{}.iformbuilder.com/exzact/api/v60", server),
                token_url: format!("https://{}.iformbuilder.com/exzact/api/oauth/token", server),
            }
        };

        if is_zim_key(client_key) {
            endpoints.token_url = match region {
                Region::Qa => ZIM_QA_TOKEN_URL.to_string(),
                _ => ZIM_TOKEN_URL.to_string(),
            };
        }

        endpoints
    }

    /// Creates explicit endpoints, validating both URLs.
    pub fn custom(host: &str, token_url: &str) -> Result<Self, ClientError> {
        Url::parse(host)?;
        Url::parse(token_url)?;
        Ok(Self {
            host: host.trim_end_matches('/').to_string(),
            token_url: token_url.to_string(),
        })
    }
}

/// Returns whether the client key is a Zerion Identity credential.
pub fn is_zim_key(client_key: &str) -> bool {
    client_key.contains('.')
}

/// Validated, immutable configuration of a [`Client`](crate::Client).
#[derive(Clone)]
pub struct ClientConfig {
    server: String,
    region: Region,
    client_key: String,
    client_secret: String,
    version: ApiVersion,
    endpoints: Endpoints,
    pub(crate) simple_response: bool,
    pub(crate) skip_rate_limit_retry: bool,
    pub(crate) retry: RetryPolicy,
    pub(crate) refresh: AutoRefreshConfig,
    pub(crate) log_dispatch: Option<tracing::Dispatch>,
}

impl ClientConfig {
    /// Validates the construction parameters.
    ///
    /// Fails with [`ClientError::InvalidParameters`] if any string is empty or
    /// the version is zero, then with [`ClientError::InvalidVersion`] or
    /// [`ClientError::InvalidRegion`] for values outside the supported sets.
    pub fn new(
        server: &str,
        region: &str,
        client_key: &str,
        client_secret: &str,
        version: f64,
    ) -> Result<Self, ClientError> {
        if server.is_empty()
            || region.is_empty()
            || client_key.is_empty()
            || client_secret.is_empty()
            || version == 0.0
        {
            return Err(ClientError::InvalidParameters);
        }

        let version = ApiVersion::try_from(version)?;
        let region = region.parse::<Region>()?;

        Ok(Self {
            server: server.to_string(),
            region,
            client_key: client_key.to_string(),
            client_secret: client_secret.to_string(),
            version,
            endpoints: Endpoints::resolve(server, region, version, client_key),
            simple_response: false,
            skip_rate_limit_retry: false,
            retry: RetryPolicy::default(),
            refresh: AutoRefreshConfig::default(),
            log_dispatch: None,
        })
    }

    /// Returns the decoded body only, without status code and headers.
    pub fn simple_response(mut self, enable: bool) -> Self {
        self.simple_response = enable;
        self
    }

    /// Returns 429 responses to the caller instead of sleeping and retrying.
    pub fn skip_rate_limit_retry(mut self, enable: bool) -> Self {
        self.skip_rate_limit_retry = enable;
        self
    }

    /// Sets the rate limit retry policy.
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the token exchange and refresh timings.
    pub fn refresh_config(mut self, refresh: AutoRefreshConfig) -> Self {
        self.refresh = refresh;
        self
    }

    /// Overrides the resolved host and token endpoint.
    pub fn endpoints(mut self, host: &str, token_url: &str) -> Result<Self, ClientError> {
        self.endpoints = Endpoints::custom(host, token_url)?;
        Ok(self)
    }

    /// Routes the client's log events to the given dispatcher instead of
    /// the caller's current default.
    pub fn log_dispatch(mut self, dispatch: tracing::Dispatch) -> Self {
        self.log_dispatch = Some(dispatch);
        self
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn client_key(&self) -> &str {
        &self.client_key
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn host(&self) -> &str {
        &self.endpoints.host
    }

    pub fn token_url(&self) -> &str {
        &self.endpoints.token_url
    }

    pub fn is_simple_response(&self) -> bool {
        self.simple_response
    }

    pub fn is_skip_rate_limit_retry(&self) -> bool {
        self.skip_rate_limit_retry
    }

    pub fn retry(&self) -> &RetryPolicy {
        &self.retry
    }

    pub fn refresh(&self) -> &AutoRefreshConfig {
        &self.refresh
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("server", &self.server)
            .field("region", &self.region)
            .field("client_key", &self.client_key)
            .field("version", &self.version)
            .field("endpoints", &self.endpoints)
            .field("simple_response", &self.simple_response)
            .field("skip_rate_limit_retry", &self.skip_rate_limit_retry)
            .field("retry", &self.retry)
            .field("refresh", &self.refresh)
            .finish()
    }
}
