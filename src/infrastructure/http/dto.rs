//! Data Transfer Objects
//!
//! 所有 `/api` 接口的响应都带有 `success` 字段

use serde::{Deserialize, Serialize};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 仅包含提示信息的响应，成功与失败共用
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// 成功响应
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// 错误响应
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

// ============================================================================
// Name DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AddNameRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct NamesResponse {
    pub success: bool,
    pub names: Vec<String>,
}
