use thiserror::Error;

use crate::types::rsc::reason_phrase;

/// 未收到任何响应时使用的固定错误消息
pub const NETWORK_ERROR_MSG: &str = "Network Error. Please try again later";

/// 归一化的传输层错误
///
/// 客户端的响应拦截阶段把所有传输失败统一为这个形状，调用方永远
/// 不会看到原始的连接错误：
/// - 服务端有响应：`code` 为 HTTP 状态码，`msg` 取自原因短语表
///   （表外状态码 `msg` 为空字符串）。
/// - 未收到响应（连接/DNS/超时）：`code` 为哨兵值 `-1`，`msg` 为
///   固定的网络错误消息。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {msg}")]
pub struct TransportError {
    pub code: i32,
    pub msg: String,
}

impl TransportError {
    /// 从 HTTP 状态码构造
    pub fn from_status(status: u16) -> Self {
        Self {
            code: status as i32,
            msg: reason_phrase(status).unwrap_or_default().to_string(),
        }
    }

    /// 构造连接级失败（未收到任何响应）
    pub fn network() -> Self {
        Self {
            code: -1,
            msg: NETWORK_ERROR_MSG.to_string(),
        }
    }

    /// 是否为连接级失败
    pub fn is_network(&self) -> bool {
        self.code == -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_uses_reason_phrase() {
        let error = TransportError::from_status(404);
        assert_eq!(error.code, 404);
        assert_eq!(error.msg, "Not Found");
        assert!(!error.is_network());
    }

    #[test]
    fn test_from_status_unknown_code_has_empty_msg() {
        let error = TransportError::from_status(599);
        assert_eq!(error.code, 599);
        assert_eq!(error.msg, "");
    }

    #[test]
    fn test_network_error_sentinel() {
        let error = TransportError::network();
        assert_eq!(error.code, -1);
        assert_eq!(error.msg, NETWORK_ERROR_MSG);
        assert!(error.is_network());
    }

    #[test]
    fn test_display_format() {
        let error = TransportError::from_status(503);
        assert_eq!(error.to_string(), "[503] Service Unavailable");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        // 传输错误经 anyhow 包装后必须仍可被还原，调度器依赖这一点做分类
        let error: anyhow::Error = TransportError::network().into();
        let transport = error.downcast_ref::<TransportError>().unwrap();
        assert_eq!(transport.code, -1);
    }
}
