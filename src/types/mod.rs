//! 类型定义模块
//!
//! 连接配置与服务器类型

pub mod connection_config;
pub mod server_type;

pub use connection_config::*;
pub use server_type::ServerType;
