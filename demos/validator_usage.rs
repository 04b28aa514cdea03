use egret_http::{ClientOptions, Validator, create_client};

/// 校验钩子用法：HTTP 钩子做全局状态码审计，业务钩子做统一埋点
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let validator = Validator::new()
        .http(|response| {
            // 全局处理：未授权跳登录、404 上报之类都放这里
            match response.status {
                404 => println!("🛑 HTTP 钩子: 资源不存在 ({})", response.status_text),
                status => println!("🛑 HTTP 钩子: 状态码 {status}"),
            }
        })
        .business(|payload| {
            println!("📝 业务钩子: 收到载荷 {payload}");
        });

    let client = create_client(
        validator,
        ClientOptions {
            base_url: Some("https://yesno.wtf".to_string()),
            ..Default::default()
        },
    )?;

    // 成功路径：业务钩子触发，HTTP 钩子保持安静
    if let Ok(response) = client.get("/api").await {
        println!("✅ {} {}", response.status, response.status_text);
    }

    // 错误路径：HTTP 钩子触发，错误已归一化为 { code, msg }
    if let Err(error) = client.get("/api/error").await {
        println!("❌ 归一化错误: {error}");
    }
    Ok(())
}
