//! Hello Names - 名字收集服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Names Context: 名字校验
//!
//! 应用层 (application/):
//! - Ports: 端口定义（NameStore）
//! - Commands: AddName
//! - Queries: ListNames
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum + CORS）
//! - Memory: NameStore 内存实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
