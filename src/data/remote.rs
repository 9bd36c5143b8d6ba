//! HTTP fetcher for the recipe list

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Url};

use super::dto::{Recipes, RecipesItem};
use super::error::{NETWORK_ERROR, NO_INTERNET_CONNECTION};
use super::resource::Resource;

/// Path of the recipe list, relative to the configured base URL
pub const RECIPES_PATH: &str = "recipes.json";

#[async_trait]
pub trait RemoteDataSource: Send + Sync {
    async fn request_recipes(&self) -> Resource<Recipes>;
}

/// Answers whether a request has any chance of reaching the server
#[async_trait]
pub trait NetworkConnectivity: Send + Sync {
    async fn is_connected(&self) -> bool;
}

/// Proxy variables reqwest reads for `scheme`, most specific first
fn proxy_vars(scheme: &str) -> &'static [&'static str] {
    match scheme {
        "https" => &["HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"],
        "http" => &["HTTP_PROXY", "http_proxy", "ALL_PROXY", "all_proxy"],
        _ => &["ALL_PROXY", "all_proxy"],
    }
}

/// Whether any proxy variable for `scheme` is set to a non-empty value
fn proxy_configured(scheme: &str, lookup: impl Fn(&str) -> Option<String>) -> bool {
    proxy_vars(scheme)
        .iter()
        .any(|name| lookup(name).is_some_and(|value| !value.trim().is_empty()))
}

/// Connectivity check that opens a TCP connection to the recipe host
#[derive(Clone, Debug)]
pub struct TcpConnectivity {
    host: String,
    port: u16,
    timeout: Duration,
    /// Requests go through a proxy, so the direct connect is skipped
    proxied: bool,
}

impl TcpConnectivity {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
            proxied: false,
        }
    }

    /// Check the host and port that `url` points at, unless the environment
    /// routes that scheme through a proxy
    pub fn for_url(url: &Url, timeout: Duration) -> Option<Self> {
        let host = url.host_str()?;
        let port = url.port_or_known_default()?;
        let proxied = proxy_configured(url.scheme(), |name| std::env::var(name).ok());
        if proxied {
            tracing::info!(host, "Proxy configured, direct connectivity check disabled");
        }
        Some(Self {
            proxied,
            ..Self::new(host, port, timeout)
        })
    }
}

#[async_trait]
impl NetworkConnectivity for TcpConnectivity {
    async fn is_connected(&self) -> bool {
        if self.proxied {
            return true;
        }

        let addr = (self.host.as_str(), self.port);
        match tokio::time::timeout(self.timeout, tokio::net::TcpStream::connect(addr)).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                tracing::debug!(host = %self.host, port = self.port, error = %e, "Connectivity check failed");
                false
            }
            Err(_) => {
                tracing::debug!(host = %self.host, port = self.port, "Connectivity check timed out");
                false
            }
        }
    }
}

/// Fetches recipes with one GET against `<base_url>recipes.json`
pub struct RemoteData {
    client: Client,
    recipes_url: Url,
    connectivity: Arc<dyn NetworkConnectivity>,
}

impl RemoteData {
    /// Build the fetcher. `base_url` must end with `/` for the recipes path
    /// to be appended rather than replace its last segment.
    pub fn new(
        base_url: &Url,
        connect_timeout: Duration,
        read_timeout: Duration,
        connectivity: Arc<dyn NetworkConnectivity>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(connect_timeout + read_timeout)
            .build()?;
        let recipes_url = base_url.join(RECIPES_PATH)?;

        Ok(Self {
            client,
            recipes_url,
            connectivity,
        })
    }

    pub fn recipes_url(&self) -> &Url {
        &self.recipes_url
    }
}

#[async_trait]
impl RemoteDataSource for RemoteData {
    async fn request_recipes(&self) -> Resource<Recipes> {
        if !self.connectivity.is_connected().await {
            tracing::info!(url = %self.recipes_url, "No connectivity, skipping recipes request");
            return Resource::DataError(NO_INTERNET_CONNECTION);
        }

        tracing::debug!(url = %self.recipes_url, "API request started");
        let response = match self
            .client
            .get(self.recipes_url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(url = %self.recipes_url, error = %e, "Recipes request failed");
                return Resource::DataError(NETWORK_ERROR);
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.recipes_url, status = status.as_u16(), "Recipes request rejected");
            return Resource::DataError(i32::from(status.as_u16()));
        }

        match response.json::<Vec<RecipesItem>>().await {
            Ok(items) => {
                tracing::info!(count = items.len(), "Recipes fetched");
                Resource::Success(Recipes::new(items))
            }
            Err(e) => {
                tracing::error!(url = %self.recipes_url, error = %e, "Recipes body could not be read");
                Resource::DataError(NETWORK_ERROR)
            }
        }
    }
}
