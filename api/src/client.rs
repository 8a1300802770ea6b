//! HTTP implementation of [`TodoApi`].
//!
//! Thin wrapper over `reqwest` against the todos REST backend. One request
//! per call, no retries: callers own their failure policy.

use crate::{
    TodoApi,
    config::ApiConfig,
    error::{ApiError, Result},
    types::{ListQuery, NewTodo, Todo, TodoId, TodoPatch, TodoStats},
};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Error payload the backend sends on any non-success status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Response payload of a delete.
#[derive(Debug, Deserialize)]
struct DeleteAck {
    success: bool,
}

/// Request payload of a completion toggle.
#[derive(Debug, Serialize)]
struct SetCompleted {
    completed: bool,
}

/// Todo API client backed by an HTTP server.
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpTodoApi {
    /// Create a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    /// Create a client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the underlying HTTP client cannot
    /// be constructed.
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env())
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn parse<T>(response: reqwest::Response) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Turn a non-success response into the matching [`ApiError`].
///
/// The backend wraps every failure as `{"error": "..."}`; an unparseable
/// body is carried through raw.
async fn failure(
    operation: &'static str,
    response: reqwest::Response,
    id: Option<&TodoId>,
) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body).map_or(body, |parsed| parsed.error);

    tracing::warn!(
        operation,
        status = status.as_u16(),
        message = %message,
        "request rejected"
    );

    match (status, id) {
        (StatusCode::BAD_REQUEST, _) => ApiError::Validation { message },
        (StatusCode::NOT_FOUND, Some(id)) => ApiError::NotFound { id: id.clone() },
        _ => ApiError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

impl TodoApi for HttpTodoApi {
    async fn list(&self, query: ListQuery) -> Result<Vec<Todo>> {
        let url = self.config.endpoint("todos");
        tracing::debug!(url = %url, "listing todos");

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(status) = query.status.as_query_value() {
            params.push(("status", status.to_string()));
        }
        if let Some(priority) = query.priority {
            params.push(("priority", priority.as_str().to_string()));
        }
        if let Some(search) = query.search {
            params.push(("search", search));
        }

        let response = self.client.get(url).query(&params).send().await?;

        match response.status() {
            StatusCode::OK => Self::parse(response).await,
            _ => Err(failure("list", response, None).await),
        }
    }

    async fn create(&self, new_todo: NewTodo) -> Result<Todo> {
        let url = self.config.endpoint("todos");
        tracing::debug!(url = %url, title = %new_todo.title, "creating todo");

        let response = self.client.post(url).json(&new_todo).send().await?;

        match response.status() {
            StatusCode::CREATED | StatusCode::OK => Self::parse(response).await,
            _ => Err(failure("create", response, None).await),
        }
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> Result<Todo> {
        let url = self.config.endpoint(&format!("todos/{id}"));
        tracing::debug!(url = %url, completed, "toggling todo");

        let response = self
            .client
            .patch(url)
            .json(&SetCompleted { completed })
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Self::parse(response).await,
            _ => Err(failure("set_completed", response, Some(&id)).await),
        }
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        let url = self.config.endpoint(&format!("todos/{id}"));
        tracing::debug!(url = %url, "updating todo");

        let response = self.client.put(url).json(&patch).send().await?;

        match response.status() {
            StatusCode::OK => Self::parse(response).await,
            _ => Err(failure("update", response, Some(&id)).await),
        }
    }

    async fn delete(&self, id: TodoId) -> Result<()> {
        let url = self.config.endpoint(&format!("todos/{id}"));
        tracing::debug!(url = %url, "deleting todo");

        let response = self.client.delete(url).send().await?;

        match response.status() {
            StatusCode::OK => {
                let ack: DeleteAck = Self::parse(response).await?;
                if ack.success {
                    Ok(())
                } else {
                    Err(ApiError::Api {
                        status: StatusCode::OK.as_u16(),
                        message: "server did not acknowledge the delete".to_string(),
                    })
                }
            }
            _ => Err(failure("delete", response, Some(&id)).await),
        }
    }

    async fn stats(&self) -> Result<TodoStats> {
        let url = self.config.endpoint("todos/stats");
        tracing::debug!(url = %url, "fetching stats");

        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => Self::parse(response).await,
            _ => Err(failure("stats", response, None).await),
        }
    }
}
