use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::types::{Response, TransportError};

/// 业务校验钩子：在每个传输成功的响应上收到原始载荷
pub type BusinessHook = Box<dyn Fn(&Value) + Send + Sync>;
/// HTTP 校验钩子：在服务端返回非成功状态时收到错误响应视图
pub type HttpHook = Box<dyn Fn(&Response) + Send + Sync>;

/// 校验器配置
///
/// 两个字段都是可选的纯副作用钩子（全局审计、统一弹窗之类），
/// 返回值不参与控制流。缺省即不配置任何校验器。
#[derive(Default)]
pub struct Validator {
    pub http: Option<HttpHook>,
    pub business: Option<BusinessHook>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置 HTTP 校验钩子
    pub fn http(mut self, hook: impl Fn(&Response) + Send + Sync + 'static) -> Self {
        self.http = Some(Box::new(hook));
        self
    }

    /// 设置业务校验钩子
    pub fn business(mut self, hook: impl Fn(&Value) + Send + Sync + 'static) -> Self {
        self.business = Some(Box::new(hook));
        self
    }
}

/// 客户端配置
///
/// 调用方通过结构体更新语法在默认值上逐键覆盖：
/// `ClientOptions { timeout_ms: 10_000, ..Default::default() }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// 传输层超时（毫秒）
    pub timeout_ms: u64,
    /// 请求路径的统一前缀
    pub base_url: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 5000,
            base_url: None,
        }
    }
}

/// 预配置的请求客户端
///
/// 进程级可复用资源：一次创建，跨请求共享，自身不保留任何
/// 请求间的可变状态。
pub struct Client {
    client: reqwest::Client,
    base_url: String,
    validator: Validator,
}

/// 创建带校验钩子的客户端
///
/// # 参数
///
/// * `validator` - 校验器配置，`Validator::default()` 表示不配置
/// * `options` - 客户端配置，在 `{ timeout_ms: 5000 }` 上逐键覆盖
///
/// # 返回值
///
/// 可跨请求复用的客户端句柄
pub fn create_client(validator: Validator, options: ClientOptions) -> anyhow::Result<Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(options.timeout_ms))
        .build()?;
    Ok(Client {
        client,
        base_url: options.base_url.unwrap_or_default(),
        validator,
    })
}

impl Client {
    pub async fn get(&self, path: &str) -> anyhow::Result<Response> {
        self.execute(self.client.get(self.full_url(path))).await
    }

    pub async fn delete(&self, path: &str) -> anyhow::Result<Response> {
        self.execute(self.client.delete(self.full_url(path))).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> anyhow::Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.execute(self.client.post(self.full_url(path)).json(body))
            .await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> anyhow::Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.execute(self.client.put(self.full_url(path)).json(body))
            .await
    }

    fn full_url(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// 执行请求并应用响应拦截
    ///
    /// 请求阶段直接透传，构建失败原样向上传播。响应阶段：
    /// - 2xx：调用业务钩子后原样放行；
    /// - 服务端返回错误状态：调用 HTTP 钩子，归一化为 `TransportError`；
    /// - 完全未收到响应：归一化为 `code = -1` 的网络错误。
    async fn execute(&self, request_builder: reqwest::RequestBuilder) -> anyhow::Result<Response> {
        match request_builder.send().await {
            Ok(raw) => {
                let success = raw.status().is_success();
                let response = Response::from_raw(raw).await?;
                if success {
                    if let Some(business) = &self.validator.business {
                        business(&response.payload);
                    }
                    Ok(response)
                } else {
                    if let Some(http) = &self.validator.http {
                        http(&response);
                    }
                    Err(TransportError::from_status(response.status).into())
                }
            }
            Err(e) => match e.status() {
                // send 阶段失败但带有状态码（如重定向策略拒绝）
                Some(status) => {
                    let response = Response::from_status_only(status.as_u16());
                    if let Some(http) = &self.validator.http {
                        http(&response);
                    }
                    Err(TransportError::from_status(response.status).into())
                }
                None => Err(TransportError::network().into()),
            },
        }
    }
}
