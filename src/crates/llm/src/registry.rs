//! Name → provider lookup assembled once at startup.

use crate::error::Result;
use crate::provider::{ProviderKind, TextProvider};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Registered text-generation providers keyed by lowercase name.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, Arc<dyn TextProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every supported provider whose API key is set.
    pub fn from_env() -> Result<Self> {
        let mut registry = Self::new();

        for kind in ProviderKind::ALL {
            match kind.config_from_env()? {
                Some(config) => {
                    info!(provider = %kind, model = %config.model, "Registered AI provider");
                    registry.register(kind.as_str(), kind.build(config)?);
                }
                None => {
                    warn!(provider = %kind, "{} not set; provider disabled", kind.api_key_env());
                }
            }
        }

        Ok(registry)
    }

    /// Register (or replace) a provider under `name`.
    pub fn register(&mut self, name: impl AsRef<str>, provider: Arc<dyn TextProvider>) -> &mut Self {
        self.providers.insert(name.as_ref().trim().to_lowercase(), provider);
        self
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, name: impl AsRef<str>, provider: Arc<dyn TextProvider>) -> Self {
        self.register(name, provider);
        self
    }

    /// Look up a provider, ignoring case.
    pub fn get(&self, name: &str) -> Option<Arc<dyn TextProvider>> {
        self.providers.get(&name.trim().to_lowercase()).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(&name.trim().to_lowercase())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}
