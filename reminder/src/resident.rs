//! Resolve residents through the user service.
use std::sync::Arc;
use std::time;

use service_common::client::{PathTemplate, ServiceClient};
use service_common::discovery::ServiceResolver;
use service_common::error::ClientError;
use service_common::model::User;
use tracing::instrument;

/// Logical name the user service is registered under.
pub const USER_SERVICE: &str = "user";

pub const RESIDENT_PATH: &str = "/api/residents/{userId}";

#[derive(Clone)]
pub struct ResidentClient {
    client: ServiceClient,
    template: PathTemplate,
}

impl ResidentClient {
    pub fn new(
        resolver: Arc<dyn ServiceResolver + Send + Sync>,
        request_timeout: time::Duration,
    ) -> Self {
        Self {
            client: ServiceClient::new(USER_SERVICE, resolver, request_timeout),
            template: PathTemplate::new(RESIDENT_PATH).expect("resident path template is valid"),
        }
    }

    /// GET `/api/residents/{userId}` on the user service.
    #[instrument(skip(self))]
    pub async fn get_resident_by_id(&self, user_id: &str) -> Result<User, ClientError> {
        self.client.get_json(&self.template, user_id).await
    }
}
