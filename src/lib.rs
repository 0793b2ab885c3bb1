//! firebird_helper - Firebird 连接字符串构建器
//!
//! 通过链式调用配置连接参数，按驱动要求的固定顺序生成
//! `Key=Value;` 形式的连接字符串
//!
//! ```ignore
//! use firebird_helper::ConnectionStringBuilder;
//!
//! let connection_string = ConnectionStringBuilder::new(r"c:\data\database.fdb")?
//!     .with_data_source("server")
//!     .with_username("MyUser")
//!     .with_password("MyP@ssword!")
//!     .with_role("RDB$ADMIN")
//!     .with_port(3051)
//!     .connection_string();
//! ```

// 导出所有公共模块
pub mod error;
pub mod types;
pub mod config;
pub mod i18n;

// 重新导出常用类型和函数
pub use error::{FirebirdHelperError, FirebirdHelperResult};
pub use types::*;
pub use config::ConnectionStringBuilder;

// 条件编译调试宏 - 只有在 debug 模式下才输出调试信息
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        rat_logger::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        // 在 release 模式下不输出调试信息
    };
}

/// 初始化firebird_helper库
///
/// 注册多语言错误消息并根据环境变量选择语言
///
/// 注意：日志系统由调用者自行初始化，本库不会初始化日志
pub fn init() {
    i18n::ErrorMessageI18n::init();
}

/// 库版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 库名称
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// 获取库信息
pub fn get_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
