//! # 错误类型模块
//!
//! 定义库内统一的错误类型，错误消息通过 i18n 模块本地化

use crate::i18n::localize;
use thiserror::Error;

/// firebird_helper 错误类型
#[derive(Error, Debug)]
pub enum FirebirdHelperError {
    /// 参数无效（空值或缺失）
    #[error("{}", localize("error.invalid_argument", &[("param", .param.as_str())]))]
    InvalidArgument { param: String },

    /// 配置错误
    #[error("{}", localize("error.config", &[("message", .message.as_str())]))]
    ConfigError { message: String },
}

/// 结果类型别名
pub type FirebirdHelperResult<T> = Result<T, FirebirdHelperError>;

impl FirebirdHelperError {
    /// 出错的参数名（仅 InvalidArgument 有值）
    pub fn param_name(&self) -> Option<&str> {
        match self {
            FirebirdHelperError::InvalidArgument { param } => Some(param),
            _ => None,
        }
    }
}

/// 快速构造错误
///
/// ```ignore
/// fb_error!(invalid_argument, "database");
/// fb_error!(config, format!("不支持的服务器类型: {}", s));
/// ```
#[macro_export]
macro_rules! fb_error {
    (invalid_argument, $param:expr) => {
        $crate::error::FirebirdHelperError::InvalidArgument {
            param: ($param).to_string(),
        }
    };
    (config, $msg:expr) => {
        $crate::error::FirebirdHelperError::ConfigError {
            message: ($msg).to_string(),
        }
    };
}
