use std::net::SocketAddr;

use anyhow::{anyhow, Context};

use crate::utils::keyword_filter::SearchScope;

pub const DEFAULT_LISTINGS_API_URL: &str = "https://ilikehuila.com/wp-json/wp/v2/job-listings";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub listings_api_url: String,
    pub bind_addr: SocketAddr,
    pub search_scope: SearchScope,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listings_api_url =
            lookup("LISTINGS_API_URL").unwrap_or_else(|| DEFAULT_LISTINGS_API_URL.to_string());

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:5000")?;

        let search_scope = match lookup("LISTINGS_SEARCH_SCOPE") {
            Some(scope) => scope
                .parse::<SearchScope>()
                .map_err(|e| anyhow!("LISTINGS_SEARCH_SCOPE: {}", e))?,
            None => SearchScope::default(),
        };

        Ok(AppConfig {
            listings_api_url,
            bind_addr,
            search_scope,
        })
    }
}
