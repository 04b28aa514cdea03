use crate::types::error::TransportError;

/// 失败类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// HTTP 层成功但业务校验未通过
    Business,
    /// 归一化的传输失败（非 2xx 状态或完全未收到响应）
    Transport,
    /// 其余运行时错误（解析失败、调用方代码产生的错误等）
    Logic,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Business => "business",
            FailureKind::Transport => "transport",
            FailureKind::Logic => "logic",
        }
    }
}

/// 一次调度的终值
///
/// `dispatch` 永远以 `DispatchOutcome` 结算，不会对业务/传输失败
/// 返回 `Err` —— 失败以带标签的变体体现，回调是次要通知渠道。
/// `T` 为被等待的结果类型，`U` 为抽取出的业务数据类型。
#[derive(Debug)]
pub enum DispatchOutcome<T, U> {
    /// 业务校验通过，携带抽取出的数据；`None` 表示抽取函数无产出
    Success(Option<U>),
    /// 业务错误，携带原始结果
    Business { error: T },
    /// 传输错误
    Transport { error: TransportError },
    /// 逻辑错误
    Logic { error: anyhow::Error },
    /// 守卫短路：必要参数缺失，未做任何工作
    Empty,
}

impl<T, U> DispatchOutcome<T, U> {
    /// 失败类别；成功与守卫短路返回 `None`
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            DispatchOutcome::Business { .. } => Some(FailureKind::Business),
            DispatchOutcome::Transport { .. } => Some(FailureKind::Transport),
            DispatchOutcome::Logic { .. } => Some(FailureKind::Logic),
            DispatchOutcome::Success(_) | DispatchOutcome::Empty => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Success(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DispatchOutcome::Empty)
    }

    /// 取出成功路径的数据；其余变体返回 `None`
    pub fn into_data(self) -> Option<U> {
        match self {
            DispatchOutcome::Success(data) => data,
            _ => None,
        }
    }
}
