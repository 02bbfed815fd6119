//! Remote catalog search service client.
//!
//! The service is a black box paged search: `search(term, page, limit)`
//! returns a batch of products, and an empty batch signals exhaustion.

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::config::CatalogConfig;
use crate::http_client;

use super::{Product, ProductId, Variant, VariantId};

/// Number of products requested per page.
pub const PAGE_SIZE: u32 = 10;

/// Upper bound on a single search response body.
const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// Errors raised while talking to the catalog search service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured endpoint is not a valid URL.
    #[error("Invalid catalog endpoint {endpoint}: {source}")]
    Endpoint {
        endpoint: String,
        source: url::ParseError,
    },
    /// The request failed below the HTTP layer.
    #[error("Catalog search request failed: {0}")]
    Transport(Box<ureq::Error>),
    /// The service answered with a non-success status.
    #[error("Catalog search returned HTTP {status}")]
    Status { status: u16 },
    /// The response body could not be read within bounds.
    #[error("Failed to read catalog response: {0}")]
    Read(std::io::Error),
    /// The response body was not the expected JSON shape.
    #[error("Failed to decode catalog response: {0}")]
    Decode(serde_json::Error),
}

/// Paged product search, implemented remotely in production and scripted in
/// tests.
pub trait CatalogClient: Send + Sync {
    /// Fetch one page of products matching `term`. Pages start at 1.
    fn search(&self, term: &str, page: u32, limit: u32) -> Result<Vec<Product>, CatalogError>;
}

/// Wire shape of one product returned by the search endpoint.
#[derive(Debug, Deserialize)]
pub struct RemoteProduct {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub image: Option<RemoteImage>,
    #[serde(default)]
    pub variants: Vec<RemoteVariant>,
}

#[derive(Debug, Deserialize)]
pub struct RemoteImage {
    pub src: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoteVariant {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
}

impl From<RemoteProduct> for Product {
    fn from(remote: RemoteProduct) -> Self {
        Product {
            id: ProductId::new(remote.id.to_string()),
            title: remote.title,
            vendor: remote.vendor,
            image_url: remote.image.map(|image| image.src),
            variants: remote
                .variants
                .into_iter()
                .map(|variant| Variant {
                    id: VariantId::new(variant.id.to_string()),
                    title: variant.title,
                    price: variant.price,
                })
                .collect(),
        }
    }
}

/// Client for the hosted catalog search endpoint.
pub struct HttpCatalogClient {
    endpoint: Url,
    api_key: String,
}

impl HttpCatalogClient {
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|source| CatalogError::Endpoint {
            endpoint: config.endpoint.clone(),
            source,
        })?;
        Ok(Self {
            endpoint,
            api_key: config.api_key.clone(),
        })
    }
}

impl CatalogClient for HttpCatalogClient {
    fn search(&self, term: &str, page: u32, limit: u32) -> Result<Vec<Product>, CatalogError> {
        let response = http_client::agent()
            .request_url("GET", &self.endpoint)
            .query("search", term)
            .query("page", &page.to_string())
            .query("limit", &limit.to_string())
            .set("x-api-key", &self.api_key)
            .call()
            .map_err(|err| match err {
                ureq::Error::Status(status, _) => CatalogError::Status { status },
                other => CatalogError::Transport(Box::new(other)),
            })?;
        let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
            .map_err(CatalogError::Read)?;
        let products: Vec<RemoteProduct> =
            serde_json::from_slice(&bytes).map_err(CatalogError::Decode)?;
        Ok(products.into_iter().map(Product::from).collect())
    }
}
