//! Name Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::NameStorePort;
use crate::application::queries::ListNames;

/// 名字列表响应
#[derive(Debug, Clone)]
pub struct NameListResponse {
    pub names: Vec<String>,
}

/// ListNames Handler
pub struct ListNamesHandler {
    name_store: Arc<dyn NameStorePort>,
}

impl ListNamesHandler {
    pub fn new(name_store: Arc<dyn NameStorePort>) -> Self {
        Self { name_store }
    }

    pub async fn handle(&self, _query: ListNames) -> Result<NameListResponse, ApplicationError> {
        let names = self.name_store.list_all().await;
        tracing::debug!(count = names.len(), "Names listed");
        Ok(NameListResponse { names })
    }
}
