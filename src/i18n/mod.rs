//! 多语言错误消息模块
//!
//! 使用rat_embed_lang框架提供统一的错误消息多语言支持

use rat_embed_lang::register_translations;
use std::collections::HashMap;
use std::sync::Once;

static REGISTER: Once = Once::new();

/// 错误消息翻译注册器
pub struct ErrorMessageI18n;

impl ErrorMessageI18n {
    /// 注册所有错误消息翻译
    pub fn register_all_translations() {
        let mut translations = HashMap::new();

        // 参数无效
        let mut invalid_argument = HashMap::new();
        invalid_argument.insert("zh-CN".to_string(), "参数无效: '{param}' 不能为空".to_string());
        invalid_argument.insert("en-US".to_string(), "Invalid argument: '{param}' must not be null or empty".to_string());
        invalid_argument.insert("ja-JP".to_string(), "無効な引数: '{param}' は空にできません".to_string());
        translations.insert("error.invalid_argument".to_string(), invalid_argument);

        // 配置错误
        let mut config_errors = HashMap::new();
        config_errors.insert("zh-CN".to_string(), "配置错误: {message}".to_string());
        config_errors.insert("en-US".to_string(), "Configuration error: {message}".to_string());
        config_errors.insert("ja-JP".to_string(), "設定エラー: {message}".to_string());
        translations.insert("error.config".to_string(), config_errors);

        register_translations(translations);
    }

    /// 初始化错误消息多语言支持
    pub fn init() {
        Self::ensure_registered();

        // 从环境变量获取语言设置，默认为zh-CN
        let lang = std::env::var("FIREBIRD_HELPER_LANG")
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_else(|_| "zh-CN".to_string());

        use rat_embed_lang::normalize_language_code;
        let normalized_lang = normalize_language_code(&lang);
        set_language(&normalized_lang);
    }

    /// 确保翻译只注册一次
    pub(crate) fn ensure_registered() {
        REGISTER.call_once(Self::register_all_translations);
    }
}

/// 按当前语言格式化错误消息
///
/// 调用者未执行 `init()` 时也能拿到已注册的模板
pub fn localize(key: &str, args: &[(&str, &str)]) -> String {
    ErrorMessageI18n::ensure_registered();
    let text = tf(key, args);
    if text == key {
        // 当前语言没有对应模板
        let detail = args.iter().map(|(_, v)| *v).collect::<Vec<_>>().join(", ");
        return format!("{}: {}", key, detail);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localize_keeps_arguments() {
        let msg = localize("error.config", &[("message", "未知的服务器类型")]);
        assert!(msg.contains("未知的服务器类型"));
    }
}

/// 重新导出rat_embed_lang的核心函数
pub use rat_embed_lang::{current_language, set_language, t, tf};
