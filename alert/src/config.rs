use envconfig::Envconfig;
use url::Url;

use service_common::config::EnvMsDuration;
use service_common::discovery::StaticResolver;

use crate::event::EVENT_SERVICE;

#[derive(Envconfig, Clone)]
pub struct Config {
    #[envconfig(default = "http://localhost:9992")]
    pub event_service_url: Url,

    #[envconfig(default = "5000")]
    pub request_timeout: EnvMsDuration,

    /// Optional `name=url,...` table. Takes precedence over `EVENT_SERVICE_URL` when set.
    pub service_registry: Option<StaticResolver>,
}

impl Config {
    pub fn resolver(&self) -> StaticResolver {
        match &self.service_registry {
            Some(registry) => registry.clone(),
            None => {
                StaticResolver::new().with_service(EVENT_SERVICE, self.event_service_url.clone())
            }
        }
    }
}
