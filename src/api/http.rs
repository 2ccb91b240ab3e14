//! HTTP client for the platform API
//!
//! Implements [`WorkspaceService`] and [`AgentService`] against the `v2` REST
//! endpoints. One shared `reqwest::Client` is used for connection pooling.

use super::{AgentService, WorkspaceService};
use crate::config::{normalize_base_url, ApiConfig};
use crate::error::ApiError;
use crate::state::{Agent, AgentId, AgentStatusUpdate, AgentToken, AgentUpdate, Workspace};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// REST client for workspaces, agents and enrollment tokens
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(
            client,
            &config.base_url,
            config.token.clone(),
        ))
    }

    /// Wrap an existing `reqwest::Client`
    pub fn with_client(client: reqwest::Client, base_url: &str, token: Option<String>) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}v2/{}", self.base_url, path)
    }

    fn workspace_path(workspace: &str) -> String {
        format!("ws/{}/", urlencoding::encode(workspace))
    }

    fn agent_path(workspace: &str, agent_id: AgentId) -> String {
        format!("{}agents/{}/", Self::workspace_path(workspace), agent_id)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "Calling platform API");
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Token {}", token)),
            None => builder,
        }
    }

    /// Send a request and map non-success statuses to errors
    async fn send(&self, builder: RequestBuilder, context: &str) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());

        tracing::warn!(
            status_code = status.as_u16(),
            error_body = %body,
            context = context,
            "Platform API returned error status"
        );

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized(context.to_string()));
        }
        Err(ApiError::Status {
            status: status.as_u16(),
            context: context.to_string(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response, context: &str) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            context: context.to_string(),
            source,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, context: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, path), context).await?;
        Self::decode(response, context).await
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let builder = self.request(method, path).json(body);
        let response = self.send(builder, context).await?;
        Self::decode(response, context).await
    }
}

#[async_trait]
impl WorkspaceService for ApiClient {
    async fn list(&self) -> Result<Vec<Workspace>, ApiError> {
        self.get_json("ws/", "fetch workspaces").await
    }

    async fn get(&self, name: &str) -> Result<Workspace, ApiError> {
        self.get_json(&Self::workspace_path(name), "fetch workspace")
            .await
    }
}

#[async_trait]
impl AgentService for ApiClient {
    async fn get_token(&self, workspace: &str) -> Result<AgentToken, ApiError> {
        let path = format!("{}agent_token/", Self::workspace_path(workspace));
        self.get_json(&path, "fetch agent token").await
    }

    async fn reissue_token(&self) -> Result<AgentToken, ApiError> {
        self.send_json(
            Method::POST,
            "agent_token/",
            &serde_json::json!({}),
            "issue agent token",
        )
        .await
    }

    async fn list(&self, workspace: &str) -> Result<Vec<Agent>, ApiError> {
        let path = format!("{}agents/", Self::workspace_path(workspace));
        self.get_json(&path, "fetch agents").await
    }

    async fn run(&self, workspace: &str, agent_id: AgentId) -> Result<(), ApiError> {
        let path = format!("{}run/", Self::agent_path(workspace, agent_id));
        let builder = self.request(Method::POST, &path).json(&serde_json::json!({}));
        self.send(builder, "run agent").await?;
        Ok(())
    }

    async fn delete(&self, workspace: &str, agent_id: AgentId) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &Self::agent_path(workspace, agent_id));
        self.send(builder, "delete agent").await?;
        Ok(())
    }

    async fn update(
        &self,
        workspace: &str,
        update: &AgentUpdate,
    ) -> Result<AgentStatusUpdate, ApiError> {
        self.send_json(
            Method::PUT,
            &Self::agent_path(workspace, update.id),
            update,
            "update agent",
        )
        .await
    }
}
