use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::types::error::TransportError;
use crate::types::rsc::reason_phrase;

/// 已落地的 HTTP 响应
///
/// 请求成功解析后得到的信封：状态码、原因短语、头部与业务载荷。
/// 载荷统一为 `serde_json::Value`，非 JSON 响应体降级为字符串，
/// 空响应体为 `Null`。
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub status_text: String,
    pub headers: HeaderMap,
    pub payload: Value,
}

impl Response {
    /// 从 reqwest 原始响应构造
    ///
    /// 读取响应体失败（传输中断）归一化为网络错误。
    pub(crate) async fn from_raw(raw: reqwest::Response) -> anyhow::Result<Self> {
        let status = raw.status().as_u16();
        let status_text = raw
            .status()
            .canonical_reason()
            .or_else(|| reason_phrase(status))
            .unwrap_or_default()
            .to_string();
        let headers = raw.headers().clone();
        let text = raw.text().await.map_err(|_| TransportError::network())?;
        Ok(Self {
            status,
            status_text,
            headers,
            payload: parse_payload(&text),
        })
    }

    /// 仅有状态码可用时的最小响应视图（send 阶段带状态码的失败）
    pub(crate) fn from_status_only(status: u16) -> Self {
        Self {
            status,
            status_text: reason_phrase(status).unwrap_or_default().to_string(),
            headers: HeaderMap::new(),
            payload: Value::Null,
        }
    }
}

fn parse_payload(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_payload_json() {
        assert_eq!(parse_payload(r#"{"answer":"yes"}"#), json!({"answer": "yes"}));
        assert_eq!(parse_payload("[1,2,3]"), json!([1, 2, 3]));
    }

    #[test]
    fn test_parse_payload_non_json_degrades_to_string() {
        assert_eq!(parse_payload("plain text"), json!("plain text"));
    }

    #[test]
    fn test_parse_payload_empty_is_null() {
        assert_eq!(parse_payload(""), Value::Null);
    }

    #[test]
    fn test_from_status_only() {
        let response = Response::from_status_only(404);
        assert_eq!(response.status, 404);
        assert_eq!(response.status_text, "Not Found");
        assert_eq!(response.payload, Value::Null);
    }
}
