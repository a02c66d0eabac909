use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_USER_AGENT: &str = "pokecard/0.1";

pub const BASE_URL_VAR: &str = "POKECARD_BASE_URL";
pub const USER_AGENT_VAR: &str = "POKECARD_USER_AGENT";

/// Where the catalog lives and how we identify ourselves to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CatalogConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Build from `POKECARD_BASE_URL` / `POKECARD_USER_AGENT`, falling back to
    /// the defaults for anything unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = match non_blank(BASE_URL_VAR) {
            Some(base_url) => Self::new(base_url.trim()),
            None => Self::default(),
        };
        if let Some(user_agent) = non_blank(USER_AGENT_VAR) {
            config.user_agent = user_agent;
        }
        config
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
