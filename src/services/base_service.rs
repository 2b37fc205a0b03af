//! Base Service

use crate::client_error::ClientError;
use crate::tools::routes::{PathParam, Resource};
use crate::Client;
use std::sync::Arc;

/// Base trait for all API services.
pub trait BaseService {
    /// Returns a reference to the client the service sends through.
    fn client(&self) -> &Arc<Client>;

    /// Full URL of a resource for the given path parameters, without
    /// sending anything.
    fn resource_url(&self, resource: Resource, ids: &[PathParam<'_>]) -> Result<String, ClientError> {
        Ok(self.client().build_url(&resource.render(ids)?))
    }
}
