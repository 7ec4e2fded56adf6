//! Name Queries

/// 列出所有名字查询
#[derive(Debug, Clone)]
pub struct ListNames;
