//! 多语言错误消息系统测试示例

use firebird_helper::*;

fn main() {
    // 初始化firebird_helper，包括多语言错误消息系统
    firebird_helper::init();

    println!("=== 多语言错误消息系统测试 ===\n");

    for lang in ["zh-CN", "en-US", "ja-JP"] {
        firebird_helper::i18n::set_language(lang);
        println!("{}:", lang);

        if let Err(e) = ConnectionStringBuilder::new("") {
            println!("   参数错误: {}", e);
        }
        if let Err(e) = "superserver".parse::<ServerType>() {
            println!("   配置错误: {}", e);
        }
        println!();
    }
}
