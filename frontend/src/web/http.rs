//! HTTP 传输层
//!
//! `HttpClient` trait 把“发出请求”与 API 语义分离：
//! 浏览器中由 `gloo-net` 实现 (`FetchClient`)，测试中替换为 `MockHttpClient`。
//! 后端只有一个 POST 端点，因此请求固定为 POST。

use async_trait::async_trait;

/// HTTP 错误类型
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// 请求构建失败
    #[error("failed to build request: {0}")]
    RequestBuildFailed(String),
    /// 网络请求失败
    #[error("network error: {0}")]
    NetworkError(String),
    /// 响应体读取失败
    #[error("failed to read response: {0}")]
    ResponseParseFailed(String),
}

/// POST 请求
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn post(url: &str) -> Self {
        Self {
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// 按名称（大小写不敏感）查找请求头
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 检查响应是否成功 (2xx)
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP 客户端特性
///
/// (?Send)：浏览器中的 future 不是 Send 的。
#[async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError>;
}

// =========================================================
// 实现层: 浏览器 fetch
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = gloo_net::http::Request::post(&req.url);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| HttpError::RequestBuildFailed(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::ResponseParseFailed(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

#[cfg(test)]
pub use mock::MockHttpClient;
