//! HTTP client for the FinanzApp finance-tracking API
//!
//! One GET per call against a fixed base address. No retries, no explicit
//! timeouts beyond the transport defaults, no partial-result merging: a
//! failed call is an error and the caller decides what to substitute.

pub mod error;
pub mod model;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use error::{ClientError, ClientResult};
use model::{Category, ChartData, DashboardStats, Debtor, ListResponse, Movement, OwnDebt};

/// Client for the downstream finance-tracking API
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base address, e.g.
    /// `http://localhost:8090/api`. A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a downstream path and decode the JSON body.
    async fn get_json(&self, path: &str) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let value = self.get_json(path).await?;
        serde_json::from_value(value).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// Fetch a collection endpoint, tolerating both the bare-array and
    /// the paginated `results` envelope shapes.
    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Vec<T>> {
        let response: ListResponse<T> = self.fetch(path).await?;
        Ok(response.into_vec())
    }

    pub async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        self.fetch("/dashboard/stats/").await
    }

    /// The stats payload as raw JSON, for the passthrough endpoint.
    pub async fn dashboard_stats_raw(&self) -> ClientResult<Value> {
        self.get_json("/dashboard/stats/").await
    }

    pub async fn recent_movements(&self) -> ClientResult<Vec<Movement>> {
        self.fetch_list("/dashboard/movimientos/").await
    }

    pub async fn dashboard_charts(&self) -> ClientResult<ChartData> {
        self.fetch("/dashboard/graficos/").await
    }

    pub async fn debtors(&self) -> ClientResult<Vec<Debtor>> {
        self.fetch_list("/deudores/").await
    }

    pub async fn own_debts(&self) -> ClientResult<Vec<OwnDebt>> {
        self.fetch_list("/mis-deudas/").await
    }

    pub async fn movements(&self) -> ClientResult<Vec<Movement>> {
        self.fetch_list("/movimientos/").await
    }

    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.fetch_list("/categorias/").await
    }
}
