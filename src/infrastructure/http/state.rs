//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{AddNameHandler, ListNamesHandler, NameStorePort};

/// 应用状态
///
/// 存储实例由调用方创建后注入，测试中每个用例可使用独立的存储
pub struct AppState {
    // ========== Ports ==========
    pub name_store: Arc<dyn NameStorePort>,

    // ========== Command Handlers ==========
    pub add_name_handler: AddNameHandler,

    // ========== Query Handlers ==========
    pub list_names_handler: ListNamesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(name_store: Arc<dyn NameStorePort>) -> Self {
        Self {
            name_store: name_store.clone(),
            add_name_handler: AddNameHandler::new(name_store.clone()),
            list_names_handler: ListNamesHandler::new(name_store),
        }
    }
}
