//! Weight log service client
//!
//! `WeightLogApi` is the seam between the component and the network. The
//! reqwest implementation talks to the real service; tests substitute their
//! own.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use std::sync::Arc;
use tracing::debug;
use weight_logs_shared::{DataEnvelope, NewWeightLog, Session, WeightLogEntry, WeightLogQuery};

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};

/// Operations the weight log service exposes
#[async_trait]
pub trait WeightLogApi: Send + Sync {
    /// `GET /api/users/{id}/weight-logs`
    async fn list(
        &self,
        session: &Session,
        query: &WeightLogQuery,
    ) -> ClientResult<Vec<WeightLogEntry>>;

    /// `POST /api/users/{id}/weight-logs`. The response body is ignored.
    async fn create(&self, session: &Session, log: &NewWeightLog) -> ClientResult<()>;
}

#[async_trait]
impl<T: WeightLogApi + ?Sized> WeightLogApi for Arc<T> {
    async fn list(
        &self,
        session: &Session,
        query: &WeightLogQuery,
    ) -> ClientResult<Vec<WeightLogEntry>> {
        (**self).list(session, query).await
    }

    async fn create(&self, session: &Session, log: &NewWeightLog) -> ClientResult<()> {
        (**self).create(session, log).await
    }
}

/// HTTP implementation backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpWeightLogApi {
    client: Client,
    base_url: Url,
}

impl HttpWeightLogApi {
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/users/{user_id}/weight-logs`, with the id percent-encoded
    pub fn logs_url(&self, user_id: &str) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "users", user_id, "weight-logs"]);
        Ok(url)
    }
}

#[async_trait]
impl WeightLogApi for HttpWeightLogApi {
    async fn list(
        &self,
        session: &Session,
        query: &WeightLogQuery,
    ) -> ClientResult<Vec<WeightLogEntry>> {
        let url = self.logs_url(&session.user_id)?;
        debug!(url = %url, date = ?query.date, "GET weight logs");

        let mut request = self.client.get(url).bearer_auth(&session.token);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = ensure_success(request.send().await?).await?;
        let body = response.text().await?;
        let envelope: DataEnvelope<Vec<WeightLogEntry>> =
            serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))?;

        Ok(envelope.data)
    }

    async fn create(&self, session: &Session, log: &NewWeightLog) -> ClientResult<()> {
        let url = self.logs_url(&session.user_id)?;
        debug!(url = %url, weight = log.weight, unit = %log.unit, "POST weight log");

        let response = self
            .client
            .post(url)
            .bearer_auth(&session.token)
            .json(log)
            .send()
            .await?;
        ensure_success(response).await?;

        Ok(())
    }
}

/// Turn any non-2xx response into `ClientError::Status`
async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}
