use std::fmt;
use std::str::FromStr;

/// Firebird 服务器类型
///
/// 序列化到连接字符串时使用整数编码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ServerType {
    /// 独立服务器进程
    #[default]
    Standard = 0,
    /// 嵌入式库
    Embedded = 1,
}

impl ServerType {
    /// 连接字符串中使用的整数编码
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// 获取服务器类型的字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerType::Standard => "standard",
            ServerType::Embedded => "embedded",
        }
    }
}

impl FromStr for ServerType {
    type Err = crate::error::FirebirdHelperError;

    /// 从字符串解析服务器类型，不区分大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(ServerType::Standard),
            "embedded" => Ok(ServerType::Embedded),
            _ => Err(crate::fb_error!(config, format!("不支持的服务器类型: {}", s))),
        }
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
