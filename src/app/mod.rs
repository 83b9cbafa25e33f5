// ==========================================
// 家禽杂交预测系统 - 应用层
// ==========================================
// 职责: 依赖装配与 HTTP 路由
// ==========================================

pub mod http;
pub mod state;

// 重导出
pub use http::router;
pub use state::{get_default_db_path, AppState};
