//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod name_handlers;

pub use name_handlers::*;
