//! # 连接字符串构建器模块
//!
//! 提供 Firebird 连接字符串的构建器实现，支持链式调用和默认值

use crate::debug_log;
use crate::error::FirebirdHelperResult;
use crate::types::*;
use rat_logger::info;

/// 连接字符串构建器
///
/// 构造时必须提供数据库路径或名称，其余配置项均有默认值。
/// 文本类配置项（除角色外）传入空字符串时保留原值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionStringBuilder {
    config: ConnectionConfig,
}

impl ConnectionStringBuilder {
    /// 创建新的构建器
    ///
    /// # 参数
    ///
    /// * `database` - 数据库文件路径或别名
    ///
    /// # 错误
    ///
    /// `database` 为空时返回 `InvalidArgument`，参数名为 `database`
    pub fn new<S: Into<String>>(database: S) -> FirebirdHelperResult<Self> {
        let database = database.into();
        if database.is_empty() {
            return Err(crate::fb_error!(invalid_argument, "database"));
        }

        info!("创建连接字符串构建器: 数据库={}", database);

        Ok(Self {
            config: ConnectionConfig::with_defaults(database),
        })
    }

    /// 从可能缺失的数据库参数创建构建器
    ///
    /// `None` 与空字符串同样视为无效参数
    pub fn from_optional(database: Option<&str>) -> FirebirdHelperResult<Self> {
        match database {
            Some(database) => Self::new(database),
            None => Err(crate::fb_error!(invalid_argument, "database")),
        }
    }

    /// 设置数据源（服务器地址），空值保留原值
    ///
    /// # 参数
    ///
    /// * `data_source` - 数据源，默认值见 [`DEFAULT_DATA_SOURCE`]
    pub fn with_data_source<S: AsRef<str>>(mut self, data_source: S) -> Self {
        assign_if_not_empty(&mut self.config.data_source, data_source.as_ref());
        self
    }

    /// 设置用户名，空值保留原值
    ///
    /// # 参数
    ///
    /// * `username` - 用户名，默认值见 [`DEFAULT_USERNAME`]
    pub fn with_username<S: AsRef<str>>(mut self, username: S) -> Self {
        assign_if_not_empty(&mut self.config.username, username.as_ref());
        self
    }

    /// 设置密码，空值保留原值
    ///
    /// # 参数
    ///
    /// * `password` - 密码，默认值见 [`DEFAULT_PASSWORD`]
    pub fn with_password<S: AsRef<str>>(mut self, password: S) -> Self {
        assign_if_not_empty(&mut self.config.password, password.as_ref());
        self
    }

    /// 设置字符集，空值保留原值
    ///
    /// # 参数
    ///
    /// * `charset` - 字符集，默认值见 [`DEFAULT_CHARSET`]
    pub fn with_charset<S: AsRef<str>>(mut self, charset: S) -> Self {
        assign_if_not_empty(&mut self.config.charset, charset.as_ref());
        self
    }

    /// 设置角色
    ///
    /// 与其他文本配置项不同，空字符串同样会覆盖原值
    pub fn with_role<S: Into<String>>(mut self, role: S) -> Self {
        self.config.role = Some(role.into());
        self
    }

    /// 设置端口
    pub fn with_port(mut self, port: i32) -> Self {
        self.config.port = port;
        self
    }

    /// 设置SQL方言
    pub fn with_dialect(mut self, dialect: i32) -> Self {
        self.config.dialect = dialect;
        self
    }

    /// 设置连接生存时间（秒）
    pub fn with_connection_lifetime(mut self, connection_lifetime: i32) -> Self {
        self.config.connection_lifetime = connection_lifetime;
        self
    }

    /// 设置最小池大小
    pub fn with_min_pool_size(mut self, min_pool_size: i32) -> Self {
        self.config.min_pool_size = min_pool_size;
        self
    }

    /// 设置最大池大小
    pub fn with_max_pool_size(mut self, max_pool_size: i32) -> Self {
        self.config.max_pool_size = max_pool_size;
        self
    }

    /// 设置网络包大小
    pub fn with_packet_size(mut self, packet_size: i32) -> Self {
        self.config.packet_size = packet_size;
        self
    }

    /// 启用连接池
    pub fn with_pooling(mut self) -> Self {
        self.config.pooling = true;
        self
    }

    /// 禁用连接池
    pub fn without_pooling(mut self) -> Self {
        self.config.pooling = false;
        self
    }

    /// 使用独立服务器
    pub fn with_server_type_standard(mut self) -> Self {
        self.config.server_type = ServerType::Standard;
        self
    }

    /// 使用嵌入式服务器
    pub fn with_server_type_embedded(mut self) -> Self {
        self.config.server_type = ServerType::Embedded;
        self
    }

    /// 按服务器类型设置
    pub fn with_server_type(mut self, server_type: ServerType) -> Self {
        self.config.server_type = server_type;
        self
    }

    /// 生成连接字符串
    ///
    /// 不消耗构建器，字段未变化时多次调用结果相同
    pub fn connection_string(&self) -> String {
        debug_log!(
            "生成连接字符串: 数据库={}, 数据源={}, 服务器类型={}",
            self.config.database,
            self.config.data_source,
            self.config.server_type
        );
        self.config.to_connection_string()
    }

    /// 当前配置
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// 取出配置
    pub fn into_config(self) -> ConnectionConfig {
        self.config
    }

    pub fn database(&self) -> &str {
        self.config.database()
    }

    pub fn data_source(&self) -> &str {
        self.config.data_source()
    }

    pub fn username(&self) -> &str {
        self.config.username()
    }

    pub fn password(&self) -> &str {
        self.config.password()
    }

    pub fn role(&self) -> Option<&str> {
        self.config.role()
    }

    pub fn port(&self) -> i32 {
        self.config.port()
    }

    pub fn dialect(&self) -> i32 {
        self.config.dialect()
    }

    pub fn charset(&self) -> &str {
        self.config.charset()
    }

    pub fn connection_lifetime(&self) -> i32 {
        self.config.connection_lifetime()
    }

    pub fn pooling(&self) -> bool {
        self.config.pooling()
    }

    pub fn min_pool_size(&self) -> i32 {
        self.config.min_pool_size()
    }

    pub fn max_pool_size(&self) -> i32 {
        self.config.max_pool_size()
    }

    pub fn packet_size(&self) -> i32 {
        self.config.packet_size()
    }

    pub fn server_type(&self) -> ServerType {
        self.config.server_type()
    }
}

fn assign_if_not_empty(field: &mut String, value: &str) {
    if !value.is_empty() {
        *field = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FirebirdHelperError;

    fn sut() -> ConnectionStringBuilder {
        ConnectionStringBuilder::new("n/a").unwrap()
    }

    #[test]
    fn test_new_rejects_empty_database() {
        let err = ConnectionStringBuilder::new("").unwrap_err();
        match err {
            FirebirdHelperError::InvalidArgument { param } => assert_eq!(param, "database"),
            other => panic!("意外的错误类型: {:?}", other),
        }
    }

    #[test]
    fn test_from_optional_rejects_missing_database() {
        let err = ConnectionStringBuilder::from_optional(None).unwrap_err();
        assert_eq!(err.param_name(), Some("database"));

        let err = ConnectionStringBuilder::from_optional(Some("")).unwrap_err();
        assert_eq!(err.param_name(), Some("database"));

        let builder = ConnectionStringBuilder::from_optional(Some("employee")).unwrap();
        assert_eq!(builder.database(), "employee");
    }

    #[test]
    fn test_defaults() {
        let sut = sut();
        assert_eq!(sut.database(), "n/a");
        assert_eq!(sut.data_source(), "localhost");
        assert_eq!(sut.username(), "SYSDBA");
        assert_eq!(sut.password(), "masterkey");
        assert_eq!(sut.charset(), "ISO8859_1");
        assert_eq!(sut.connection_lifetime(), 15);
        assert_eq!(sut.dialect(), 3);
        assert_eq!(sut.max_pool_size(), 50);
        assert_eq!(sut.min_pool_size(), 0);
        assert_eq!(sut.packet_size(), 8192);
        assert!(sut.pooling());
        assert_eq!(sut.port(), 3050);
        assert_eq!(sut.role(), None);
        assert_eq!(sut.server_type(), ServerType::Standard);
    }

    #[test]
    fn test_text_setters_ignore_empty() {
        let sut = sut()
            .with_data_source("server")
            .with_data_source("")
            .with_username("MyUser")
            .with_username("")
            .with_password("MyP@ssword!")
            .with_password("")
            .with_charset("NONE")
            .with_charset("");

        assert_eq!(sut.data_source(), "server");
        assert_eq!(sut.username(), "MyUser");
        assert_eq!(sut.password(), "MyP@ssword!");
        assert_eq!(sut.charset(), "NONE");
    }

    #[test]
    fn test_default_constants_restore_defaults() {
        let sut = sut()
            .with_charset("UTF8")
            .with_charset(DEFAULT_CHARSET)
            .with_port(3051)
            .with_port(DEFAULT_PORT);

        assert_eq!(sut.charset(), "ISO8859_1");
        assert_eq!(sut.port(), 3050);
    }

    #[test]
    fn test_role_always_overwrites() {
        // 角色没有空值保护，这是有意为之的不对称行为
        let sut = sut().with_role("RDB$ADMIN");
        assert_eq!(sut.role(), Some("RDB$ADMIN"));

        let sut = sut.with_role("");
        assert_eq!(sut.role(), Some(""));
        assert!(sut.connection_string().contains(";Role=;"));
    }

    #[test]
    fn test_integer_setters_overwrite() {
        let sut = sut()
            .with_connection_lifetime(30)
            .with_dialect(1)
            .with_max_pool_size(100)
            .with_min_pool_size(10)
            .with_packet_size(4096)
            .with_port(-1);

        assert_eq!(sut.connection_lifetime(), 30);
        assert_eq!(sut.dialect(), 1);
        assert_eq!(sut.max_pool_size(), 100);
        assert_eq!(sut.min_pool_size(), 10);
        assert_eq!(sut.packet_size(), 4096);
        assert_eq!(sut.port(), -1);
    }

    #[test]
    fn test_pooling_toggle() {
        let sut = sut().without_pooling();
        assert!(!sut.pooling());
        assert!(sut.connection_string().contains(";Pooling=False;"));

        let sut = sut.with_pooling();
        assert!(sut.pooling());
    }

    #[test]
    fn test_server_type_last_call_wins() {
        let sut = sut().with_server_type_embedded();
        assert_eq!(sut.server_type(), ServerType::Embedded);
        assert!(sut.connection_string().ends_with(";ServerType=1"));

        let sut = sut.with_server_type_standard();
        assert_eq!(sut.server_type(), ServerType::Standard);
    }
}
