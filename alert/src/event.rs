use std::sync::Arc;
use std::time;

use service_common::client::{PathTemplate, ServiceClient};
use service_common::discovery::ServiceResolver;
use service_common::error::ClientError;
use service_common::model::EventModel;
use tracing::instrument;

pub const EVENT_SERVICE: &str = "event";

pub const EVENT_PATH: &str = "/event/getEvent/{eventId}";

/// Fetches event details from the event service ahead of alerting.
#[derive(Clone)]
pub struct EventClient {
    client: ServiceClient,
    template: PathTemplate,
}

impl EventClient {
    pub fn new(
        resolver: Arc<dyn ServiceResolver + Send + Sync>,
        request_timeout: time::Duration,
    ) -> Self {
        Self {
            client: ServiceClient::new(EVENT_SERVICE, resolver, request_timeout),
            template: PathTemplate::new(EVENT_PATH).expect("event path template is valid"),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: &str) -> Result<EventModel, ClientError> {
        self.client.get_json(&self.template, event_id).await
    }
}
