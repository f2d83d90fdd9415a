//! Resolve logical service names (`user`, `event`) to base URLs.
use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("no address is registered for service {0}")]
    UnknownService(String),
}

/// Maps a logical service name to the base URL requests should be sent to.
/// Implementations may consult a registry, DNS, or static configuration.
#[async_trait]
pub trait ServiceResolver {
    async fn resolve(&self, service: &str) -> Result<Url, DiscoveryError>;
}

/// A fixed name to base URL table, typically read from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticResolver {
    services: HashMap<String, Url>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: &str, base_url: Url) -> Self {
        self.insert(service, base_url);
        self
    }

    pub fn insert(&mut self, service: &str, base_url: Url) {
        self.services.insert(service.to_owned(), base_url);
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[async_trait]
impl ServiceResolver for StaticResolver {
    async fn resolve(&self, service: &str) -> Result<Url, DiscoveryError> {
        self.services
            .get(service)
            .cloned()
            .ok_or_else(|| DiscoveryError::UnknownService(service.to_owned()))
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseResolverError {
    #[error("registry entry {0:?} is not of the form name=url")]
    MissingSeparator(String),
    #[error("registry entry {0:?} has an empty service name")]
    EmptyName(String),
    #[error("service {0} is listed more than once in the registry")]
    DuplicateService(String),
    #[error("registry entry for {service} has an invalid url: {error}")]
    InvalidUrl {
        service: String,
        error: url::ParseError,
    },
}

/// Parse a table such as `user=http://localhost:9991,event=http://localhost:9992`.
impl FromStr for StaticResolver {
    type Err = ParseResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut resolver = StaticResolver::new();

        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, url) = entry
                .split_once('=')
                .ok_or_else(|| ParseResolverError::MissingSeparator(entry.to_owned()))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(ParseResolverError::EmptyName(entry.to_owned()));
            }

            if resolver.services.contains_key(name) {
                return Err(ParseResolverError::DuplicateService(name.to_owned()));
            }

            let url = Url::parse(url.trim()).map_err(|error| ParseResolverError::InvalidUrl {
                service: name.to_owned(),
                error,
            })?;
            resolver.insert(name, url);
        }

        Ok(resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_registered_service() {
        let resolver = StaticResolver::new()
            .with_service("user", Url::parse("http://localhost:9991").unwrap());

        let url = resolver.resolve("user").await.unwrap();
        assert_eq!(url.as_str(), "http://localhost:9991/");
    }

    #[tokio::test]
    async fn test_resolve_unknown_service() {
        let resolver = StaticResolver::new();

        assert_eq!(
            resolver.resolve("event").await,
            Err(DiscoveryError::UnknownService("event".to_owned()))
        );
    }

    #[tokio::test]
    async fn test_parse_registry_table() {
        let resolver: StaticResolver =
            " user=http://users.internal:9991 , event=http://events.internal/prefix/,"
                .parse()
                .unwrap();

        assert_eq!(resolver.len(), 2);
        assert_eq!(
            resolver.resolve("user").await.unwrap().as_str(),
            "http://users.internal:9991/"
        );
        assert_eq!(
            resolver.resolve("event").await.unwrap().as_str(),
            "http://events.internal/prefix/"
        );
    }

    #[test]
    fn test_parse_registry_errors() {
        assert_eq!(
            "user".parse::<StaticResolver>(),
            Err(ParseResolverError::MissingSeparator("user".to_owned()))
        );
        assert_eq!(
            "=http://localhost".parse::<StaticResolver>(),
            Err(ParseResolverError::EmptyName("=http://localhost".to_owned()))
        );
        assert!(matches!(
            "user=not a url".parse::<StaticResolver>(),
            Err(ParseResolverError::InvalidUrl { service, .. }) if service == "user"
        ));
        assert!("".parse::<StaticResolver>().unwrap().is_empty());
    }

    #[test]
    fn test_parse_registry_rejects_duplicate_service() {
        assert_eq!(
            "user=http://a:1, user=http://b:2".parse::<StaticResolver>(),
            Err(ParseResolverError::DuplicateService("user".to_owned()))
        );
    }
}
