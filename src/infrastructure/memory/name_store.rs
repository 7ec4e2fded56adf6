//! In-Memory Name Store Implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::ports::NameStorePort;
use crate::domain::names::PersonName;

/// 内存名字存储
///
/// 写锁保证追加的原子性，读操作返回快照
pub struct InMemoryNameStore {
    names: RwLock<Vec<PersonName>>,
}

impl InMemoryNameStore {
    pub fn new() -> Self {
        Self {
            names: RwLock::new(Vec::new()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryNameStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameStorePort for InMemoryNameStore {
    async fn append(&self, name: PersonName) {
        let mut names = self.names.write().await;
        tracing::debug!(name = %name, index = names.len(), "Name appended");
        names.push(name);
    }

    async fn list_all(&self) -> Vec<String> {
        self.names
            .read()
            .await
            .iter()
            .map(|n| n.as_str().to_string())
            .collect()
    }

    async fn count(&self) -> usize {
        self.names.read().await.len()
    }
}
