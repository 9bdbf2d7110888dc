use crate::api::models::{WorkCode, WorkCodePayload};
use crate::error::ApiError;
use reqwest::{Client, Method, RequestBuilder, Response};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("wkc-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct WorkCodeClient {
    client: Client,
    pub base_url: String,
    pub api_key: Option<String>,
}

impl WorkCodeClient {
    // Create base client with default settings
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Http {
                status: 0,
                endpoint: "client_init".to_string(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(WorkCodeClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
        })
    }

    pub fn with_api_key(base_url: String, api_key: String) -> Result<Self, ApiError> {
        let mut client = WorkCodeClient::new(base_url)?;
        client.api_key = Some(api_key);
        Ok(client)
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(api_key) = &self.api_key {
            request = request.header("x-api-key", api_key);
        }

        request
    }

    /// List all work codes.
    pub async fn list_work_codes(&self) -> Result<Vec<WorkCode>, ApiError> {
        let endpoint = "/work-codes";
        let response = self.send(self.build_request(Method::GET, endpoint), endpoint).await?;
        self.handle_response(response, endpoint).await
    }

    /// Fetch a single work code by ID.
    pub async fn get_work_code(&self, id: u32) -> Result<WorkCode, ApiError> {
        let endpoint = format!("/work-codes/{}", id);
        let response = self.send(self.build_request(Method::GET, &endpoint), &endpoint).await?;
        self.handle_response(response, &endpoint).await
    }

    /// Create a new work code. The backend assigns the identifier.
    pub async fn create_work_code(&self, payload: &WorkCodePayload) -> Result<WorkCode, ApiError> {
        let endpoint = "/work-codes";
        let request = self.build_request(Method::POST, endpoint).json(payload);
        let response = self.send(request, endpoint).await?;
        self.handle_response(response, endpoint).await
    }

    /// Update an existing work code. The identifier is immutable.
    pub async fn update_work_code(
        &self,
        id: u32,
        payload: &WorkCodePayload,
    ) -> Result<WorkCode, ApiError> {
        let endpoint = format!("/work-codes/{}", id);
        let request = self.build_request(Method::PUT, &endpoint).json(payload);
        let response = self.send(request, &endpoint).await?;
        self.handle_response(response, &endpoint).await
    }

    /// Delete a work code. Accepts 200 or 204 with any (or no) body.
    pub async fn delete_work_code(&self, id: u32) -> Result<(), ApiError> {
        let endpoint = format!("/work-codes/{}", id);
        let response = self.send(self.build_request(Method::DELETE, &endpoint), &endpoint).await?;
        self.handle_empty_response(response, &endpoint).await
    }

    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    timeout_secs: DEFAULT_TIMEOUT_SECS,
                    endpoint: endpoint.to_string(),
                }
            } else {
                ApiError::Http {
                    status: 0,
                    endpoint: endpoint.to_string(),
                    message: format!("Request failed: {}", e),
                }
            }
        })
    }

    pub async fn handle_response<T>(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message: format!("Failed to parse response: {}", e),
            })
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            match status.as_u16() {
                401 | 403 => Err(ApiError::Unauthorized {
                    status: status.as_u16(),
                    endpoint: endpoint.to_string(),
                    server_message: error_text,
                }),
                408 | 504 => Err(ApiError::Timeout {
                    timeout_secs: DEFAULT_TIMEOUT_SECS,
                    endpoint: endpoint.to_string(),
                }),
                _ => Err(ApiError::Http {
                    status: status.as_u16(),
                    endpoint: endpoint.to_string(),
                    message: error_text,
                }),
            }
        }
    }

    async fn handle_empty_response(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match status.as_u16() {
            401 | 403 => Err(ApiError::Unauthorized {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                server_message: error_text,
            }),
            _ => Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message: error_text,
            }),
        }
    }
}
