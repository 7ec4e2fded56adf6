//! Memory Layer - In-Memory State Management
//!
//! 实现 NameStore，进程内存中保存已提交的名字

mod name_store;

pub use name_store::InMemoryNameStore;
