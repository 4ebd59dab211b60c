use crate::errors::DomainError;
use std::sync::Arc;

pub const DEFAULT_DOMESTIC_RESOLVER: &str = "114.114.114.114";
pub const DEFAULT_FOREIGN_RESOLVER: &str = "8.8.8.8";

/// Ordered, non-empty list of resolver addresses for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSet {
    addresses: Arc<[Arc<str>]>,
}

impl ResolverSet {
    pub fn new(addresses: Vec<String>) -> Result<Self, DomainError> {
        if addresses.is_empty() {
            return Err(DomainError::InvalidResolverSet(
                "Resolver set cannot be empty".to_string(),
            ));
        }
        let mut parsed: Vec<Arc<str>> = Vec::with_capacity(addresses.len());
        for address in addresses {
            let address = address.trim();
            if address.is_empty() {
                return Err(DomainError::InvalidResolverSet(
                    "Resolver address cannot be blank".to_string(),
                ));
            }
            if address.chars().any(char::is_whitespace) {
                return Err(DomainError::InvalidResolverSet(format!(
                    "Resolver address '{}' contains whitespace",
                    address
                )));
            }
            parsed.push(Arc::from(address));
        }
        Ok(Self {
            addresses: parsed.into(),
        })
    }

    /// Empty input falls back to `default`.
    pub fn or_default(addresses: Vec<String>, default: &str) -> Result<Self, DomainError> {
        if addresses.is_empty() {
            Self::new(vec![default.to_string()])
        } else {
            Self::new(addresses)
        }
    }

    pub fn domestic_default() -> Self {
        Self {
            addresses: Arc::from([Arc::from(DEFAULT_DOMESTIC_RESOLVER)]),
        }
    }

    pub fn foreign_default() -> Self {
        Self {
            addresses: Arc::from([Arc::from(DEFAULT_FOREIGN_RESOLVER)]),
        }
    }

    pub fn addresses(&self) -> &[Arc<str>] {
        &self.addresses
    }

    pub fn joined(&self) -> String {
        self.addresses.join(" ")
    }
}

impl std::fmt::Display for ResolverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.joined())
    }
}
