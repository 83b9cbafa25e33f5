// ==========================================
// 家禽杂交预测系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::importer::dq_validator::DqViolation;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    // ===== 解析错误 =====
    #[error("目录 JSON 解析失败 (行 {line}, 列 {column}): {message}")]
    JsonParseError {
        line: usize,
        column: usize,
        message: String,
    },

    // ===== 数据质量错误 =====
    #[error("数据质量校验失败: {error_count} 条错误")]
    ValidationFailed {
        error_count: usize,
        violations: Vec<DqViolation>,
    },

    #[error("目录为空")]
    EmptyCatalog,

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ImportError::FileNotFound(err.to_string()),
            _ => ImportError::FileReadError(err.to_string()),
        }
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::JsonParseError {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
