/// 基本使用示例：构建站点配置并生成标题的基础样式
///
/// 运行示例：
/// ```bash
/// cargo run --example emit_base -p crosswind-theme
/// ```
use crosswind_theme::{apply_plugins, site_config};

fn main() {
    let config = site_config();

    // 1. 配置自检
    let diagnostics = config.check();
    if diagnostics.is_empty() {
        println!("✓ 配置自检通过");
    } else {
        for diagnostic in &diagnostics {
            println!("{:?}: {}", diagnostic.level, diagnostic.message);
        }
    }

    // 2. 执行插件，收集基础样式
    let output = apply_plugins(&config);
    println!("✓ 基础样式规则：{} 条", output.base.len());
    for diagnostic in &output.diagnostics {
        println!("{:?}: {}", diagnostic.level, diagnostic.message);
    }

    // 3. 输出 CSS
    println!("\n--- base css ---");
    print!("{}", output.base.to_css("  "));

    // 4. 宿主看到的配置形态
    if let Ok(json) = config.to_json() {
        println!("\n--- config json ---");
        println!("{}", json);
    }
}
