//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Names Context: 名字校验

pub mod names;
