use envconfig::Envconfig;
use url::Url;

use service_common::config::EnvMsDuration;
use service_common::discovery::StaticResolver;

use crate::resident::USER_SERVICE;

#[derive(Envconfig, Clone)]
pub struct Config {
    #[envconfig(default = "http://localhost:9991")]
    pub user_service_url: Url,

    #[envconfig(default = "5000")]
    pub request_timeout: EnvMsDuration,

    /// Optional `name=url,...` table. Takes precedence over `USER_SERVICE_URL` when set.
    pub service_registry: Option<StaticResolver>,
}

impl Config {
    /// Build the resolver the resident client looks the user service up with.
    pub fn resolver(&self) -> StaticResolver {
        match &self.service_registry {
            Some(registry) => registry.clone(),
            None => StaticResolver::new().with_service(USER_SERVICE, self.user_service_url.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time;

    use service_common::discovery::ServiceResolver;

    use super::*;

    #[tokio::test]
    async fn test_defaults_point_at_local_user_service() {
        let config = Config::init_from_hashmap(&HashMap::new()).unwrap();

        assert_eq!(config.request_timeout.0, time::Duration::from_millis(5000));
        assert_eq!(
            config.resolver().resolve("user").await.unwrap().as_str(),
            "http://localhost:9991/"
        );
    }

    #[tokio::test]
    async fn test_registry_takes_precedence() {
        let env = HashMap::from([
            ("USER_SERVICE_URL".to_owned(), "http://ignored:1".to_owned()),
            (
                "SERVICE_REGISTRY".to_owned(),
                "user=http://users.internal:8080".to_owned(),
            ),
            ("REQUEST_TIMEOUT".to_owned(), "250".to_owned()),
        ]);
        let config = Config::init_from_hashmap(&env).unwrap();

        assert_eq!(config.request_timeout.0, time::Duration::from_millis(250));
        assert_eq!(
            config.resolver().resolve("user").await.unwrap().as_str(),
            "http://users.internal:8080/"
        );
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let env = HashMap::from([("REQUEST_TIMEOUT".to_owned(), "soon".to_owned())]);

        assert!(Config::init_from_hashmap(&env).is_err());
    }

    #[test]
    fn test_config_errors_stop_the_binary_cleanly() {
        let env = HashMap::from([("REQUEST_TIMEOUT".to_owned(), "-1".to_owned())]);
        let error = Config::init_from_hashmap(&env)
            .map_err(crate::error::ReminderError::from)
            .err()
            .expect("negative timeouts are rejected");

        assert!(matches!(error, crate::error::ReminderError::ConfigError(_)));
    }
}
