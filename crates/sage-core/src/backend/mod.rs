//! REST client for the shopping assistant backend.
//!
//! Every method is a plain request/response exchange: no retries, no
//! protocol state. Failures are classified into [`BackendError`] and handed
//! back to the calling component; the panel store is never involved in a
//! pending request.

mod error;
pub mod types;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

pub use error::{BackendError, BackendErrorKind, BackendResult};
use types::{
    AuthSession, CartAddRequest, CartRemoveRequest, CartView, ChatRequest, ChatResponse,
    CheckoutResponse, ExportRequest, LoginRequest, OrderConfirmation, ShippingDetails,
    SignupRequest, TryOnResponse,
};

/// Default backend base URL (the dev server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Per-request timeout. Agent turns can take a while; anything beyond this
/// is reported as a timeout rather than leaving the UI waiting forever.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Standard User-Agent header for sage API requests.
const USER_AGENT: &str = concat!("sage/", env!("CARGO_PKG_VERSION"));

/// Client for the shopping assistant backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    session_id: String,
}

impl BackendClient {
    /// Creates a client for the given base URL and session.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, session_id: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        let base_url = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_id: session_id.into(),
        })
    }

    /// Sends a user message to the agent.
    pub async fn chat(&self, message: &str) -> BackendResult<ChatResponse> {
        self.post_json(
            "/chat",
            &ChatRequest {
                message,
                session_id: &self.session_id,
            },
        )
        .await
    }

    /// Adds a product to the session cart.
    pub async fn cart_add(
        &self,
        product_id: &str,
        product_name: &str,
        price: f64,
        image: &str,
        quantity: u32,
    ) -> BackendResult<CartView> {
        self.post_json(
            "/cart/add",
            &CartAddRequest {
                session_id: &self.session_id,
                product_id,
                product_name,
                price,
                image,
                quantity,
            },
        )
        .await
    }

    /// Removes a product from the session cart.
    pub async fn cart_remove(&self, product_id: &str) -> BackendResult<CartView> {
        self.post_json(
            "/cart/remove",
            &CartRemoveRequest {
                session_id: &self.session_id,
                product_id,
            },
        )
        .await
    }

    /// Reads the session cart.
    pub async fn cart(&self) -> BackendResult<CartView> {
        let url = format!("{}/cart/{}", self.base_url, self.session_id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::transport(&e))?;
        Self::decode(response).await
    }

    /// Places an order with the given shipping details.
    ///
    /// Cart problems (e.g. empty cart) come back as an application error.
    pub async fn checkout(&self, shipping: &ShippingDetails) -> BackendResult<OrderConfirmation> {
        #[derive(Serialize)]
        struct CheckoutRequest<'a> {
            session_id: &'a str,
            shipping_info: &'a ShippingDetails,
        }

        let response: CheckoutResponse = self
            .post_json(
                "/checkout",
                &CheckoutRequest {
                    session_id: &self.session_id,
                    shipping_info: shipping,
                },
            )
            .await?;

        if response.status.as_deref() == Some("error") {
            return Err(BackendError::api(
                response.message.unwrap_or_else(|| "Checkout failed".to_string()),
            ));
        }
        response
            .order
            .ok_or_else(|| BackendError::parse("checkout reply carried no order"))
    }

    /// Exports the session's orders as a PDF and returns the raw bytes.
    pub async fn export_pdf(&self) -> BackendResult<Vec<u8>> {
        let url = format!("{}/export/pdf", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&ExportRequest {
                session_id: &self.session_id,
                order_id: None,
                export_all: None,
            })
            .send()
            .await
            .map_err(|e| BackendError::transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::http_status(status.as_u16(), &body));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackendError::transport(&e))?;
        debug!(bytes = bytes.len(), "pdf export received");
        Ok(bytes.to_vec())
    }

    /// Exchanges credentials for a session token.
    pub async fn login(&self, email: &str, password: &str) -> BackendResult<AuthSession> {
        self.post_json("/auth/login", &LoginRequest { email, password })
            .await
    }

    /// Creates an account and returns the fresh session token.
    pub async fn signup(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> BackendResult<AuthSession> {
        self.post_json(
            "/auth/signup",
            &SignupRequest {
                email,
                username,
                password,
            },
        )
        .await
    }

    /// Uploads a user photo and returns the rendered try-on image bytes.
    pub async fn virtual_tryon(
        &self,
        product_id: &str,
        image: Vec<u8>,
        file_name: &str,
    ) -> BackendResult<Vec<u8>> {
        let part = reqwest::multipart::Part::bytes(image).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("user_image", part)
            .text("product_id", product_id.to_string());

        let url = format!("{}/virtual-tryon", self.base_url);
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| BackendError::transport(&e))?;
        let reply: TryOnResponse = Self::decode(response).await?;

        if reply.status.as_deref() != Some("success") {
            return Err(BackendError::api(
                reply
                    .message
                    .unwrap_or_else(|| "Try-on generation failed".to_string()),
            ));
        }
        let encoded = reply
            .result_image
            .ok_or_else(|| BackendError::parse("try-on reply carried no image"))?;
        BASE64.decode(encoded).map_err(BackendError::parse)
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> BackendResult<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "backend request");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::transport(&e))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> BackendResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::transport(&e))?;
        if !status.is_success() {
            return Err(BackendError::http_status(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(BackendError::parse)
    }
}
