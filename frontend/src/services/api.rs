use anyhow::{anyhow, Context, Result};
use gloo::net::http::Request;
use shared::{AccountHistoryRequest, AccountHistoryResponse, AccountListResponse};

/// API client for the dashboard backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Accounts the signed-in user may view, with the span of their data
    pub async fn list_accounts(&self) -> Result<AccountListResponse> {
        let url = format!("{}/api/accounts", self.base_url);
        self.get_json(&url).await
    }

    /// Balance history for one account, limited to the request's window
    pub async fn get_account_history(
        &self,
        request: &AccountHistoryRequest,
    ) -> Result<AccountHistoryResponse> {
        let url = format!(
            "{}/api/accounts/{}/history{}",
            self.base_url,
            request.account_id,
            request.query_string()
        );
        self.get_json(&url).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = Request::get(url)
            .send()
            .await
            .with_context(|| format!("Network error fetching {}", url))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!("Server error {}: {}", status, error_text));
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
