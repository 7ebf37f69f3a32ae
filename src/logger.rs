//! 日志初始化模块
//!
//! 基于 tracing-subscriber，默认 info 级别，可用 RUST_LOG 覆盖

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// 只应在程序入口调用一次
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .init();
}

/// 测试用初始化（重复调用不报错）
pub fn try_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
