use crate::domain::donors::Donor;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Serialize;
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Body sent on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DonorPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    pub address: String,
    pub donated_before: String,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
}

/// The donor API as seen by the pages.
///
/// Calls never fail outward: any network error or non-success status is
/// logged and turned into an empty list, `None` or `false`.
#[async_trait]
pub trait DonorGateway: Send + Sync {
    async fn list(&self) -> Vec<Donor>;
    async fn create(&self, payload: &DonorPayload) -> Option<Donor>;
    async fn update(&self, id: &str, payload: &DonorPayload) -> Option<Donor>;
    async fn delete(&self, id: &str) -> bool;
    async fn reset(&self) -> bool;
}

/// [`DonorGateway`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpDonorClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpDonorClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// Uses `DONOR_API_URL`, defaulting to `http://localhost:3000`.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url =
            env::var("DONOR_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(&base_url)
    }

    fn donors_url(&self, segment: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in the constructor
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["api", "donors"]);
            if let Some(segment) = segment {
                segments.push(segment);
            }
        }
        url
    }

    pub async fn try_list(&self) -> Result<Vec<Donor>, ClientError> {
        let donors = self
            .http
            .get(self.donors_url(None))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(donors)
    }

    pub async fn try_create(&self, payload: &DonorPayload) -> Result<Donor, ClientError> {
        let donor = self
            .http
            .post(self.donors_url(None))
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(donor)
    }

    pub async fn try_update(&self, id: &str, payload: &DonorPayload) -> Result<Donor, ClientError> {
        let donor = self
            .http
            .put(self.donors_url(Some(id)))
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(donor)
    }

    pub async fn try_delete(&self, id: &str) -> Result<StatusCode, ClientError> {
        let response = self
            .http
            .delete(self.donors_url(Some(id)))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.status())
    }

    pub async fn try_reset(&self) -> Result<StatusCode, ClientError> {
        let response = self
            .http
            .delete(self.donors_url(Some("reset")))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.status())
    }
}

#[async_trait]
impl DonorGateway for HttpDonorClient {
    async fn list(&self) -> Vec<Donor> {
        self.try_list().await.unwrap_or_else(|e| {
            tracing::error!("Error fetching donors from API: {}", e);
            Vec::new()
        })
    }

    async fn create(&self, payload: &DonorPayload) -> Option<Donor> {
        self.try_create(payload)
            .await
            .map_err(|e| tracing::error!("Error adding donor to API: {}", e))
            .ok()
    }

    async fn update(&self, id: &str, payload: &DonorPayload) -> Option<Donor> {
        self.try_update(id, payload)
            .await
            .map_err(|e| tracing::error!("Error updating donor {} in API: {}", id, e))
            .ok()
    }

    async fn delete(&self, id: &str) -> bool {
        self.try_delete(id)
            .await
            .map_err(|e| tracing::error!("Error deleting donor {} from API: {}", id, e))
            .is_ok()
    }

    async fn reset(&self) -> bool {
        self.try_reset()
            .await
            .map_err(|e| tracing::error!("Error resetting donors in API: {}", e))
            .is_ok()
    }
}
