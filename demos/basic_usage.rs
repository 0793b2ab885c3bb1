//! firebird_helper 基本使用示例
//!
//! 展示链式配置与默认值

use firebird_helper::*;

fn main() -> FirebirdHelperResult<()> {
    firebird_helper::init();
    println!("=== firebird_helper 基本使用示例 ===");
    println!("库版本: {}", firebird_helper::get_info());

    // 1. 全部使用默认值
    println!("\n1. 默认配置...");
    let builder = ConnectionStringBuilder::new("employee")?;
    println!("   {}", builder.connection_string());

    // 2. 链式配置
    println!("\n2. 链式配置...");
    let builder = ConnectionStringBuilder::new(r"c:\data\database.fdb")?
        .with_data_source("server")
        .with_username("MyUser")
        .with_password("MyP@ssword!")
        .with_role("RDB$ADMIN")
        .with_port(3051);
    println!("   {}", builder.connection_string());

    // 3. 嵌入式服务器，不使用连接池
    println!("\n3. 嵌入式服务器...");
    let embedded = builder.clone().with_server_type_embedded().without_pooling();
    println!("   {}", embedded.connection_string());

    // 4. 空数据库参数
    println!("\n4. 空数据库参数...");
    match ConnectionStringBuilder::new("") {
        Ok(_) => println!("   ❌ 意外成功"),
        Err(e) => println!("   ✅ {}", e),
    }

    Ok(())
}
