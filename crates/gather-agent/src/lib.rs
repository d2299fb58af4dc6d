//! HTTP implementation of the store's backend seam.
//!
//! Talks to the activity service's REST surface:
//! `GET/POST /activities`, `PUT/DELETE /activities/{id}`.

use gather_core::backend::ActivityBackend;
use gather_core::error::BackendError;
use gather_shared::ActivityDto;
use tracing::{debug, instrument};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Backend collaborator over HTTP.
///
/// Holds a pooled [`reqwest::Client`]; cloning is cheap and shares the
/// pool. The agent enforces no timeouts of its own beyond the client's;
/// configure the client if you need them.
#[derive(Debug, Clone)]
pub struct RestAgent {
    client: reqwest::Client,
    base_url: String,
}

impl RestAgent {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let reason = format!("{} from {}", status, response.url());
        if status.is_client_error() {
            Err(BackendError::Rejected(reason))
        } else {
            Err(BackendError::Transport(reason))
        }
    }
}

fn transport(err: reqwest::Error) -> BackendError {
    BackendError::Transport(err.to_string())
}

#[async_trait::async_trait]
impl ActivityBackend for RestAgent {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<ActivityDto>, BackendError> {
        let url = self.url("activities");
        debug!(%url, "GET activities");

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let activities = Self::check(response)
            .await?
            .json::<Vec<ActivityDto>>()
            .await
            .map_err(|err| BackendError::Malformed(err.to_string()))?;

        debug!(count = activities.len(), "activities fetched");
        Ok(activities)
    }

    #[instrument(skip(self, activity), fields(id = %activity.id))]
    async fn create(&self, activity: &ActivityDto) -> Result<(), BackendError> {
        let url = self.url("activities");
        debug!(%url, "POST activity");

        let response = self
            .client
            .post(&url)
            .json(activity)
            .send()
            .await
            .map_err(transport)?;
        Self::check(response).await.map(|_| ())
    }

    #[instrument(skip(self, activity), fields(id = %activity.id))]
    async fn update(&self, activity: &ActivityDto) -> Result<(), BackendError> {
        let url = self.url(&format!("activities/{}", activity.id));
        debug!(%url, "PUT activity");

        let response = self
            .client
            .put(&url)
            .json(activity)
            .send()
            .await
            .map_err(transport)?;
        Self::check(response).await.map(|_| ())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> Result<(), BackendError> {
        let url = self.url(&format!("activities/{id}"));
        debug!(%url, "DELETE activity");

        let response = self.client.delete(&url).send().await.map_err(transport)?;
        Self::check(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let agent = RestAgent::new("http://localhost:5000/api/");
        assert_eq!(
            agent.url("activities"),
            "http://localhost:5000/api/activities"
        );
    }

    #[test]
    fn paths_join_without_doubled_separators() {
        let agent = RestAgent::new(DEFAULT_BASE_URL);
        assert_eq!(
            agent.url("/activities/x1"),
            "http://localhost:5000/api/activities/x1"
        );
    }
}
