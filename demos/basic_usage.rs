use egret_http::{ClientOptions, Validator, create_client, extract_payload};

/// 基础用法：创建客户端，发起请求，压缩为业务载荷
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let client = create_client(
        Validator::default(),
        ClientOptions {
            timeout_ms: 10_000,
            base_url: Some("https://yesno.wtf".to_string()),
        },
    )?;

    println!("🚀 发起请求 GET /api");
    let payload = extract_payload(client.get("/api")).await?;
    println!("✅ 业务载荷: {payload}");
    Ok(())
}
