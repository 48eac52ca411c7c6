//! HTTP client for the catalog REST API

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{Category, Listing, NewCategory, NewProduct, NewUser, User};

/// Status and body of a response, whatever the status was
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub url: String,
    pub status: StatusCode,
    pub body: String,
}

/// Catalog API client
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL every path is resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/products/slice`
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// List users
    pub async fn list_users(&self) -> ClientResult<Listing<User>> {
        self.get_json("/users").await
    }

    /// Create a user
    pub async fn create_user(&self, user: &NewUser) -> ClientResult<User> {
        self.post_json("/users", user).await
    }

    /// List categories
    pub async fn list_categories(&self) -> ClientResult<Listing<Category>> {
        self.get_json("/categories").await
    }

    /// Create a category
    pub async fn create_category(&self, category: &NewCategory) -> ClientResult<Category> {
        self.post_json("/categories", category).await
    }

    /// Create a product; only the status of the response matters
    pub async fn create_product(&self, product: &NewProduct) -> ClientResult<StatusCode> {
        let url = self.url("/products");
        debug!("POST {}", url);

        let response = self.http.post(&url).json(product).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.status())
    }

    /// GET a path with ordered query pairs; keys may repeat (`sort`).
    ///
    /// Unlike the typed helpers this never fails on a non-success status.
    pub async fn get_raw(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<RawResponse> {
        let request = self.http.get(self.url(path)).query(query).build()?;
        let url = request.url().to_string();
        debug!("GET {}", url);

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(RawResponse { url, status, body })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        decode(ensure_success(response).await?).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self.http.post(&url).json(body).send().await?;
        decode(ensure_success(response).await?).await
    }
}

async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}
