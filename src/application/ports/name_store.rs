//! Name Store Port - 名字存储
//!
//! 定义名字存储的抽象接口，具体实现在 infrastructure/memory 层

use async_trait::async_trait;

use crate::domain::names::PersonName;

/// Name Store Port
///
/// 有序、只追加的名字序列，生命周期与进程相同
#[async_trait]
pub trait NameStorePort: Send + Sync {
    /// 追加到序列末尾，不去重
    async fn append(&self, name: PersonName);

    /// 按插入顺序返回全部名字
    async fn list_all(&self) -> Vec<String>;

    /// 当前名字数量
    async fn count(&self) -> usize;
}
