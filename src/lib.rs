//! Zerion iFormBuilder Rust SDK
//!
//! A client for the iFormBuilder REST API: JWT-bearer authentication with
//! lazy token refresh, a static routing table, rate limit retries and one
//! method per API endpoint.
//!
//! ```no_run
//! use zerion_sdk::{Client, ClientConfig, ListOptions};
//!
//! # async fn run() -> Result<(), zerion_sdk::ClientError> {
//! let config = ClientConfig::new("acme", "us", "client-key", "client-secret", 8.0)?;
//! let client = Client::new(config).await;
//!
//! let users = client
//!     .users()
//!     .get_users(123, Some(ListOptions::new().fields(r#"id(>"1"),username"#)))
//!     .await?;
//! println!("{}", users);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod client_error;
pub mod config;
pub mod logging;
pub mod services;
pub mod stores;
pub mod tools;

pub use client::Client;
pub use client_error::ClientError;
pub use config::{ApiVersion, ClientConfig, Endpoints, Region};
pub use logging::{build_dispatch, LogConfig};
pub use services::{
    BaseService, DeviceLicenseService, ElementService, MediaService, NotificationService,
    OptionListService, PageGroupService, PageService, ProfileService, RecordService,
    UserGroupService, UserService,
};
pub use stores::SessionStore;
pub use tools::dtos::{IfbResponse, Response, TokenResponse};
pub use tools::options::{ListOptions, SendOptions};
pub use tools::refresh::AutoRefreshConfig;
pub use tools::retry::RetryPolicy;
pub use tools::routes::{Operation, PathParam, Resource, Verb};
