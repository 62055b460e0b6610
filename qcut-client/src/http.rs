//! HTTP client for the venue API

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::{Drink, DrinkPayload, Order, OrderFilter, User, Venue};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the venue API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Clear the bearer token
    pub fn without_token(mut self) -> Self {
        self.token = None;
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build a request with the authorization header attached
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut request = self.client.request(method, &url);

        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Send a request and decode the JSON body
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "API request failed");
            return Err(ClientError::from_status(status, &body));
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<User> {
        #[derive(serde::Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        self.send(self.request(Method::POST, "/user/login").json(&LoginRequest {
            email,
            password,
        }))
        .await
    }

    /// Resolve the current token to a user record (session restore)
    pub async fn me(&self) -> ClientResult<User> {
        self.send(self.request(Method::GET, "/user/me")).await
    }

    // ========== Venue API ==========

    /// Fetch the venue bound to the current user
    ///
    /// An empty or null body means no venue is bound; that is a valid
    /// state, distinct from an error.
    pub async fn venue_me(&self) -> ClientResult<Option<Venue>> {
        let value: serde_json::Value = self.send(self.request(Method::GET, "/venue/me")).await?;

        match &value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Object(fields) if fields.is_empty() => Ok(None),
            _ => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    /// Fetch the order history, filtered server-side by the query
    pub async fn order_history(&self, filter: &OrderFilter) -> ClientResult<Vec<Order>> {
        self.send(
            self.request(Method::GET, "/venue/orders/history")
                .query(filter),
        )
        .await
    }

    // ========== Menu API ==========

    /// Fetch the full drink list for a venue
    pub async fn menu(&self, venue_id: &str) -> ClientResult<Vec<Drink>> {
        self.send(self.request(Method::GET, &format!("/venue/{venue_id}/menu")))
            .await
    }

    /// Add a drink; returns the updated collection
    pub async fn create_drink(&self, payload: &DrinkPayload) -> ClientResult<Vec<Drink>> {
        self.send(self.request(Method::POST, "/venue/drink").json(payload))
            .await
    }

    /// Update a drink; returns the updated collection
    pub async fn update_drink(&self, id: &str, payload: &DrinkPayload) -> ClientResult<Vec<Drink>> {
        self.send(
            self.request(Method::PATCH, &format!("/venue/drink/{id}"))
                .json(payload),
        )
        .await
    }

    /// Soft-delete a drink; returns the updated collection
    pub async fn delete_drink(&self, id: &str) -> ClientResult<Vec<Drink>> {
        self.send(self.request(Method::DELETE, &format!("/venue/drink/{id}")))
            .await
    }
}
