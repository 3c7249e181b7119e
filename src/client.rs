//! Backend HTTP client for the product API.
//!
//! Two endpoints, the `ProductDraft` shape on the wire for both:
//!
//! - `GET {base}/product/{id}` — fetch a product
//! - `PUT {base}/product/{id}` — full-record replace; success iff HTTP 200

use crate::state::ProductDraft;

/// Backend address when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client-side API error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),
}

/// HTTP client for the product resource.
pub struct ProductClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL for a single product: `{base}/product/{id}`.
    fn item_url(&self, id: &str) -> String {
        format!("{}/product/{}", self.base_url, id)
    }

    /// Fetch a product by ID.
    pub async fn get(&self, id: &str) -> Result<ProductDraft, ApiError> {
        let resp = self.http.get(self.item_url(id)).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server { status: code, message: body });
        }
        resp.json::<ProductDraft>()
            .await
            .map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }

    /// Replace a product record wholesale.
    ///
    /// Only HTTP 200 counts as success; any other status is an error.
    pub async fn update(&self, id: &str, draft: &ProductDraft) -> Result<(), ApiError> {
        let resp = self.http.put(self.item_url(id)).json(draft).send().await?;

        let status = resp.status();
        if status.as_u16() != 200 {
            let code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server { status: code, message: body });
        }
        Ok(())
    }
}

impl Default for ProductClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
