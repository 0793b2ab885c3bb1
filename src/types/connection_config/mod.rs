use crate::types::server_type::ServerType;
use std::fmt;

/// 默认数据源
pub const DEFAULT_DATA_SOURCE: &str = "localhost";
/// 默认用户名
pub const DEFAULT_USERNAME: &str = "SYSDBA";
/// 默认密码
pub const DEFAULT_PASSWORD: &str = "masterkey";
/// 默认字符集
pub const DEFAULT_CHARSET: &str = "ISO8859_1";
/// 默认端口
pub const DEFAULT_PORT: i32 = 3050;
/// 默认SQL方言
pub const DEFAULT_DIALECT: i32 = 3;
/// 默认连接生存时间（秒）
pub const DEFAULT_CONNECTION_LIFETIME: i32 = 15;
/// 默认启用连接池
pub const DEFAULT_POOLING: bool = true;
/// 默认最小池大小
pub const DEFAULT_MIN_POOL_SIZE: i32 = 0;
/// 默认最大池大小
pub const DEFAULT_MAX_POOL_SIZE: i32 = 50;
/// 默认包大小
pub const DEFAULT_PACKET_SIZE: i32 = 8192;

/// Firebird 连接配置
///
/// 由 [`ConnectionStringBuilder`](crate::ConnectionStringBuilder) 持有和修改，
/// 字段只能通过构建器写入，`database` 构造后不可变且非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub(crate) database: String,
    pub(crate) data_source: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) role: Option<String>,
    pub(crate) port: i32,
    pub(crate) dialect: i32,
    pub(crate) charset: String,
    pub(crate) connection_lifetime: i32,
    pub(crate) pooling: bool,
    pub(crate) min_pool_size: i32,
    pub(crate) max_pool_size: i32,
    pub(crate) packet_size: i32,
    pub(crate) server_type: ServerType,
}

impl ConnectionConfig {
    /// 使用默认值创建配置，调用方负责保证 `database` 非空
    pub(crate) fn with_defaults(database: String) -> Self {
        Self {
            database,
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            role: None,
            port: DEFAULT_PORT,
            dialect: DEFAULT_DIALECT,
            charset: DEFAULT_CHARSET.to_string(),
            connection_lifetime: DEFAULT_CONNECTION_LIFETIME,
            pooling: DEFAULT_POOLING,
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            packet_size: DEFAULT_PACKET_SIZE,
            server_type: ServerType::Standard,
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn data_source(&self) -> &str {
        &self.data_source
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// 角色，未设置时为 `None`
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn port(&self) -> i32 {
        self.port
    }

    pub fn dialect(&self) -> i32 {
        self.dialect
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn connection_lifetime(&self) -> i32 {
        self.connection_lifetime
    }

    pub fn pooling(&self) -> bool {
        self.pooling
    }

    pub fn min_pool_size(&self) -> i32 {
        self.min_pool_size
    }

    pub fn max_pool_size(&self) -> i32 {
        self.max_pool_size
    }

    pub fn packet_size(&self) -> i32 {
        self.packet_size
    }

    pub fn server_type(&self) -> ServerType {
        self.server_type
    }

    /// 生成连接字符串
    ///
    /// 键顺序固定，键值对之间以 `;` 分隔，末尾不带分隔符。
    /// 值原样写入，不做任何转义
    pub fn to_connection_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Database={};", self.database)?;
        write!(f, "DataSource={};", self.data_source)?;
        write!(f, "User={};", self.username)?;
        write!(f, "Password={};", self.password)?;
        write!(f, "Role={};", self.role.as_deref().unwrap_or(""))?;
        write!(f, "Port={};", self.port)?;
        write!(f, "Dialect={};", self.dialect)?;
        write!(f, "Charset={};", self.charset)?;
        write!(f, "Connection lifetime={};", self.connection_lifetime)?;
        // 驱动要求首字母大写的布尔值
        write!(f, "Pooling={};", if self.pooling { "True" } else { "False" })?;
        write!(f, "MinPoolSize={};", self.min_pool_size)?;
        write!(f, "MaxPoolSize={};", self.max_pool_size)?;
        write!(f, "Packet Size={};", self.packet_size)?;
        write!(f, "ServerType={}", self.server_type.code())
    }
}
