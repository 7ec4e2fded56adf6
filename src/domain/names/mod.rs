//! Names Context - 名字限界上下文
//!
//! 职责:
//! - 名字校验（去除首尾空白，拒绝空串）

mod errors;
mod value_objects;

pub use errors::NameError;
pub use value_objects::PersonName;
