//! # 配置管理模块
//!
//! 提供连接字符串构建器

pub mod builders;

pub use builders::ConnectionStringBuilder;
