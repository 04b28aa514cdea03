use egret_http::{
    ClientOptions, DispatchCallbacks, Validator, create_client, dispatch, extract_payload,
};
use serde_json::Value;

/// 完整生命周期：loading 开始 → 等待 → 业务判定 → 对应回调 → loading 结束
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let client = create_client(
        Validator::default(),
        ClientOptions {
            base_url: Some("https://yesno.wtf".to_string()),
            ..Default::default()
        },
    )?;

    let pending = extract_payload(client.get("/api"));
    let outcome = dispatch(
        pending,
        Some(|result: &Value| result.get("answer").is_some()),
        Some(|result: &Value| Some(result.clone())),
        DispatchCallbacks::new()
            .on_loading_start(|| println!("⏳ loading 开始"))
            .on_loading_end(|| println!("⌛ loading 结束"))
            .on_success(|data| println!("✅ 业务数据: {data:?}"))
            .on_business_error(|result| println!("⚠️ 业务错误: {result}"))
            .on_transport_error(|error| println!("❌ 传输/逻辑错误: {error}")),
    )
    .await;

    match outcome.kind() {
        None => println!("🎉 调度成功结算"),
        Some(kind) => println!("🔁 失败类别: {}", kind.as_str()),
    }
    Ok(())
}
