//! HTTP 传输层
//!
//! 基于 `gloo-net` 的 fetch 实现核心库的 [`HttpClient`]。
//! 只负责把请求送出去并取回状态码与原始文本，解析与错误分类都在网关里。

use gloo_net::http::{Method, RequestBuilder};
use teebook_admin::{AdminError, AdminResult, HttpClient, HttpRequest, HttpResponse};
use teebook_shared::protocol::HttpMethod;

fn method(m: HttpMethod) -> Method {
    match m {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn network(err: gloo_net::Error) -> AdminError {
    AdminError::Network(err.to_string())
}

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> AdminResult<HttpResponse> {
        let mut builder = RequestBuilder::new(&req.url).method(method(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(network)?;

        let response = request.send().await.map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;

        Ok(HttpResponse { status, body })
    }
}
