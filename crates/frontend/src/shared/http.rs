//! HTTP transport used by list pages and dialogs.
//!
//! Pages talk to the backend only through [`HttpClient`], so the controller
//! can be driven by a recording double in tests.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use super::api_utils::api_url;
use super::error::ApiError;

#[async_trait(?Send)]
pub trait HttpClient {
    /// GET `path` and return the decoded JSON body
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// DELETE `path`; any 2xx is success and the body is ignored
    async fn delete(&self, path: &str) -> Result<(), ApiError>;

    /// POST a JSON body, returning the response body (`Null` when empty)
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// PUT a JSON body; the response body is ignored
    async fn put_json(&self, path: &str, body: &Value) -> Result<(), ApiError>;
}

/// Browser `fetch` client built on gloo-net.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooHttpClient;

impl GlooHttpClient {
    pub fn new() -> Self {
        Self
    }

    fn with_headers(builder: RequestBuilder) -> RequestBuilder {
        builder.header("Accept", "application/json")
    }

    async fn send(request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        Ok(response)
    }

    async fn body_json(response: Response) -> Result<Value, ApiError> {
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = Self::with_headers(Request::get(&api_url(path)))
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = Self::send(request).await?;
        Self::body_json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = Self::with_headers(Request::delete(&api_url(path)))
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        Self::send(request).await?;
        Ok(())
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let request = Self::with_headers(Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = Self::send(request).await?;
        Self::body_json(response).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        let request = Self::with_headers(Request::put(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        Self::send(request).await?;
        Ok(())
    }
}
