//! Query Handlers 实现

mod name_handlers;

pub use name_handlers::*;
