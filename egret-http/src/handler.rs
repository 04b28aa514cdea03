use std::future::Future;

use serde_json::Value;

use crate::types::{DispatchOutcome, Response, TransportError};

/// 把挂起的响应压缩为挂起的载荷
///
/// 成功时只保留 `payload`，丢弃状态码与头部；失败原样透传，
/// 不包装、不分类、不吞没。
pub async fn extract_payload(
    pending: impl Future<Output = anyhow::Result<Response>>,
) -> anyhow::Result<Value> {
    let response = pending.await?;
    Ok(response.payload)
}

/// 调度回调集合
///
/// 五个回调全部可选，每个至多被调用一次。省略的回调直接跳过，
/// 不影响结算值。
pub struct DispatchCallbacks<T, U> {
    /// 业务校验通过时收到抽取出的数据
    pub on_success: Option<Box<dyn FnMut(Option<&U>) + Send>>,
    /// 业务校验未通过时收到原始结果
    pub on_business_error: Option<Box<dyn FnMut(&T) + Send>>,
    /// 等待失败时收到错误（传输错误与逻辑错误都走这里）
    pub on_transport_error: Option<Box<dyn FnMut(&anyhow::Error) + Send>>,
    /// 进入等待前触发
    pub on_loading_start: Option<Box<dyn FnMut() + Send>>,
    /// 等待结束后触发，成功与失败路径都恰好一次
    pub on_loading_end: Option<Box<dyn FnMut() + Send>>,
}

impl<T, U> Default for DispatchCallbacks<T, U> {
    fn default() -> Self {
        Self {
            on_success: None,
            on_business_error: None,
            on_transport_error: None,
            on_loading_start: None,
            on_loading_end: None,
        }
    }
}

impl<T, U> DispatchCallbacks<T, U> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_success(mut self, f: impl FnMut(Option<&U>) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    pub fn on_business_error(mut self, f: impl FnMut(&T) + Send + 'static) -> Self {
        self.on_business_error = Some(Box::new(f));
        self
    }

    pub fn on_transport_error(mut self, f: impl FnMut(&anyhow::Error) + Send + 'static) -> Self {
        self.on_transport_error = Some(Box::new(f));
        self
    }

    pub fn on_loading_start(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_loading_start = Some(Box::new(f));
        self
    }

    pub fn on_loading_end(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_loading_end = Some(Box::new(f));
        self
    }
}

/// 把一次异步操作调度为统一的生命周期
///
/// 单趟执行：触发加载开始回调，等待 `pending`，用 `classify` 判定
/// 业务结果，按成功/业务错误/传输错误恰好触发一个对应回调，再触发
/// 加载结束回调，最终以 `DispatchOutcome` 结算。
///
/// 结算约定：任何业务/传输失败都体现为带标签的变体而不是 `Err`，
/// 调用方不必为失败路径写 match 之外的兜底。
///
/// # 参数
///
/// * `pending` - 被等待的异步结果（通常来自 [`extract_payload`]）
/// * `classify` - 业务码判定谓词，真值表示业务成功
/// * `extract` - 业务数据抽取函数，`None` 产出视为无数据
/// * `callbacks` - 可选回调集合
///
/// # 返回值
///
/// 本次调度的终值；`classify` 或 `extract` 缺失时不做任何工作，
/// 直接返回 [`DispatchOutcome::Empty`]（包括加载回调在内一律不触发）
pub async fn dispatch<T, U, Fut, C, D>(
    pending: Fut,
    classify: Option<C>,
    extract: Option<D>,
    mut callbacks: DispatchCallbacks<T, U>,
) -> DispatchOutcome<T, U>
where
    Fut: Future<Output = anyhow::Result<T>>,
    C: FnOnce(&T) -> bool,
    D: FnOnce(&T) -> Option<U>,
{
    let (Some(classify), Some(extract)) = (classify, extract) else {
        log::warn!("arguments 'classify' and 'extract' must both be supplied");
        return DispatchOutcome::Empty;
    };

    if let Some(on_loading_start) = callbacks.on_loading_start.as_mut() {
        on_loading_start();
    }

    match pending.await {
        Ok(result) => {
            if let Some(on_loading_end) = callbacks.on_loading_end.as_mut() {
                on_loading_end();
            }
            if classify(&result) {
                let data = extract(&result);
                if let Some(on_success) = callbacks.on_success.as_mut() {
                    on_success(data.as_ref());
                }
                DispatchOutcome::Success(data)
            } else {
                // 业务错误：HTTP 层成功但业务校验未通过
                if let Some(on_business_error) = callbacks.on_business_error.as_mut() {
                    on_business_error(&result);
                }
                DispatchOutcome::Business { error: result }
            }
        }
        Err(error) => {
            if let Some(on_loading_end) = callbacks.on_loading_end.as_mut() {
                on_loading_end();
            }
            if let Some(on_transport_error) = callbacks.on_transport_error.as_mut() {
                on_transport_error(&error);
            }
            // 能还原出 TransportError 的是传输失败，其余归为逻辑错误
            match error.downcast::<TransportError>() {
                Ok(transport) => DispatchOutcome::Transport { error: transport },
                Err(other) => DispatchOutcome::Logic { error: other },
            }
        }
    }
}
