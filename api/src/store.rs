use customers_core::{clap, prelude::*};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::StoreError,
    objects::{Customer, CustomerPatch, NewCustomer},
};

const CUSTOMERS: &str = "customers";

/// Arguments for reaching the customer store
#[derive(Debug, clap::Args)]
pub struct StoreArgs {
    #[arg(long, env, default_value = "http://localhost:3000")]
    pub store_endpoint: String,
    /// Request timeout in seconds
    #[arg(long, env, default_value_t = 30)]
    pub store_timeout: u64,
}

/// HTTP client for the JSON customer store. Every method issues exactly one
/// request.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    pub base_url: Url,
}

impl StoreClient {
    /// Returns the store client
    ///
    /// # Errors
    /// if the http client fails to build or the endpoint is not a base url
    pub fn new(args: StoreArgs) -> Result<Self> {
        let StoreArgs {
            store_endpoint,
            store_timeout,
        } = args;

        let base_url =
            Url::parse(&store_endpoint).context("failed to parse customer store endpoint")?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(store_timeout))
            .build()
            .context("failed to build http client")?;

        Self::with_client(http, base_url)
    }

    /// Returns a store client with default http settings
    ///
    /// # Errors
    /// if the url cannot be used as a base
    pub fn from_url(base_url: Url) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    fn with_client(http: reqwest::Client, base_url: Url) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            bail!("customer store endpoint {base_url} cannot be a base url");
        }

        Ok(Self { http, base_url })
    }

    fn url(&self, id: Option<&str>) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();

        // base urls are checked on construction
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(CUSTOMERS);

            if let Some(id) = id {
                if id.is_empty() {
                    return Err(StoreError::InvalidArgument(
                        "id must not be empty".to_string(),
                    ));
                }

                segments.push(id);
            }
        }

        Ok(url)
    }

    fn request(&self, method: Method, id: Option<&str>) -> Result<RequestBuilder, StoreError> {
        let url = self.url(id)?;

        debug!(%method, %url, "calling customer store");

        Ok(self.http.request(method, url))
    }

    async fn send(request: RequestBuilder) -> Result<String, StoreError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(%status, "customer store returned an error");

            // the status is reported even when the body cannot be read
            let body = response.text().await.unwrap_or_default();

            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(Into::into)
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, StoreError> {
        let body = Self::send(request).await?;

        serde_json::from_str(&body).map_err(Into::into)
    }

    /// Fetches a single customer
    ///
    /// # Errors
    /// If the store cannot be reached, responds with a non-success status or the body is not a customer
    pub async fn get(&self, id: &str) -> Result<Customer, StoreError> {
        Self::fetch(self.request(Method::GET, Some(id))?).await
    }

    /// Fetches every customer in the order the store returns them
    ///
    /// # Errors
    /// If the store cannot be reached, responds with a non-success status or the body is not a list of customers
    pub async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        Self::fetch(self.request(Method::GET, None)?).await
    }

    /// Creates a customer and returns it with the id assigned by the store
    ///
    /// # Errors
    /// If the store cannot be reached, responds with a non-success status or the body is not a customer
    pub async fn create(&self, customer: &NewCustomer) -> Result<Customer, StoreError> {
        Self::fetch(self.request(Method::POST, None)?.json(customer)).await
    }

    /// Deletes a customer. Returns `None` when the store answers with an
    /// empty body, `null` or `{}`.
    ///
    /// # Errors
    /// If the store cannot be reached, responds with a non-success status or the body is neither empty nor a customer
    pub async fn delete(&self, id: &str) -> Result<Option<Customer>, StoreError> {
        let body = Self::send(self.request(Method::DELETE, Some(id))?).await?;

        if body.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Value>(&body)? {
            Value::Null => Ok(None),
            Value::Object(map) if map.is_empty() => Ok(None),
            value => serde_json::from_value(value).map(Some).map_err(Into::into),
        }
    }

    /// Applies a partial update, sending the whole patch including `id`
    ///
    /// # Errors
    /// If the store cannot be reached, responds with a non-success status or the body is not a customer
    pub async fn update(&self, patch: &CustomerPatch) -> Result<Customer, StoreError> {
        Self::fetch(self.request(Method::PATCH, Some(&patch.id))?.json(patch)).await
    }
}
