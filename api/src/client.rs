//! Shop API client implementation.

use crate::error::ShopApiError;
use crate::types::ShopsEnvelope;
use reqwest::{Client, StatusCode};
use shopgrid_catalog::providers::{ShopCatalogGateway, ShopCreationGateway};
use shopgrid_catalog::{GatewayError, NewShop, ShopPage, ShopQuery};

/// Environment variable naming the API base URL
pub const BASE_URL_ENV: &str = "SHOPGRID_API_URL";

/// Shop API client.
///
/// Implements both gateway traits of the catalog feature on top of a shared
/// `reqwest` connection pool, so one client can be cloned into every
/// environment slot.
#[derive(Debug, Clone)]
pub struct ShopApiClient {
    client: Client,
    base_url: String,
}

impl ShopApiClient {
    /// Create a client with the base URL from the environment
    ///
    /// # Errors
    ///
    /// Returns [`ShopApiError::MissingBaseUrl`] if `SHOPGRID_API_URL` is not
    /// set.
    pub fn from_env() -> Result<Self, ShopApiError> {
        let base_url = std::env::var(BASE_URL_ENV).map_err(|_| ShopApiError::MissingBaseUrl)?;
        Ok(Self::new(base_url))
    }

    /// Create a client with an explicit base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch one page of shops
    ///
    /// Sends only the non-empty filter values, plus `page` and `size`, as
    /// query parameters. A 200 with `isSuccess: false` is a rejection, not a
    /// decode error.
    ///
    /// # Errors
    ///
    /// Returns [`ShopApiError`] for transport failures, non-200 statuses,
    /// unsuccessful envelopes, and undecodable payloads.
    #[tracing::instrument(skip(self, query), fields(page = query.page))]
    pub async fn fetch_shops(&self, query: &ShopQuery) -> Result<ShopPage, ShopApiError> {
        let mut params: Vec<(&str, String)> = query
            .filters
            .active()
            .map(|(key, value)| (key.as_str(), value.to_string()))
            .collect();
        params.push(("page", query.page.to_string()));
        params.push(("size", query.size.as_u32().to_string()));

        let response = self
            .client
            .get(format!("{}/shops", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(|e| ShopApiError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let envelope = response
                    .json::<ShopsEnvelope>()
                    .await
                    .map_err(|e| ShopApiError::ResponseParseFailed(e.to_string()))?;

                if !envelope.is_success {
                    return Err(ShopApiError::NotSuccessful);
                }

                let data = envelope.data.ok_or_else(|| {
                    ShopApiError::ResponseParseFailed("missing data in success envelope".into())
                })?;

                Ok(ShopPage {
                    shops: data.shops,
                    total_pages: data.pagination.total_pages,
                })
            },
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ShopApiError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            },
        }
    }

    /// Create a new shop
    ///
    /// Posts `{ name, adminEmail }`; anything other than 201 Created is a
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`ShopApiError`] for transport failures and non-201 statuses.
    #[tracing::instrument(skip(self, shop))]
    pub async fn create_shop(&self, shop: &NewShop) -> Result<(), ShopApiError> {
        let response = self
            .client
            .post(format!("{}/shops", self.base_url))
            .json(shop)
            .send()
            .await
            .map_err(|e| ShopApiError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::CREATED => Ok(()),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ShopApiError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            },
        }
    }
}

impl ShopCatalogGateway for ShopApiClient {
    fn fetch_shops(
        &self,
        query: ShopQuery,
    ) -> impl std::future::Future<Output = Result<ShopPage, GatewayError>> + Send {
        async move { Self::fetch_shops(self, &query).await.map_err(Into::into) }
    }
}

impl ShopCreationGateway for ShopApiClient {
    fn create_shop(
        &self,
        shop: NewShop,
    ) -> impl std::future::Future<Output = Result<(), GatewayError>> + Send {
        async move { Self::create_shop(self, &shop).await.map_err(Into::into) }
    }
}
