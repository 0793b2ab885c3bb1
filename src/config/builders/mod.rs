//! # 配置构建器模块

pub mod connection_string_builder;

pub use connection_string_builder::ConnectionStringBuilder;
