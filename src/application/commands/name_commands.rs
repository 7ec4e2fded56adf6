//! Name Commands

/// 添加名字命令
///
/// `name` 为客户端提交的原始字符串，由 handler 负责校验
#[derive(Debug, Clone)]
pub struct AddName {
    pub name: String,
}
