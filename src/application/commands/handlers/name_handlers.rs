//! Name Command Handlers

use std::sync::Arc;

use crate::application::commands::AddName;
use crate::application::error::ApplicationError;
use crate::application::ports::NameStorePort;
use crate::domain::names::PersonName;

// ============================================================================
// AddName
// ============================================================================

/// 添加名字响应
#[derive(Debug, Clone)]
pub struct AddNameResponse {
    /// 实际存储的（去除空白后的）名字
    pub name: String,
    /// 存储后的名字总数
    pub total: usize,
}

/// AddName Handler
pub struct AddNameHandler {
    name_store: Arc<dyn NameStorePort>,
}

impl AddNameHandler {
    pub fn new(name_store: Arc<dyn NameStorePort>) -> Self {
        Self { name_store }
    }

    pub async fn handle(&self, command: AddName) -> Result<AddNameResponse, ApplicationError> {
        // 校验失败时不触碰存储
        let name = PersonName::new(&command.name)?;
        let stored = name.as_str().to_string();

        self.name_store.append(name).await;
        let total = self.name_store.count().await;

        tracing::info!(name = %stored, total = total, "Name stored");

        Ok(AddNameResponse {
            name: stored,
            total,
        })
    }
}
