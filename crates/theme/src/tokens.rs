//! 宿主引擎默认主题的内联值映射
//!
//! token 解析在配置自身的分区没有命中时落到这里。
//! 仅包含插件实际会引用的分区，不是完整的默认主题。

use phf::phf_map;

/// `fontSize.{size}` → font-size 值
pub static FONT_SIZE: phf::Map<&'static str, &'static str> = phf_map! {
    "xs" => "0.75rem",
    "sm" => "0.875rem",
    "base" => "1rem",
    "lg" => "1.125rem",
    "xl" => "1.25rem",
    "2xl" => "1.5rem",
    "3xl" => "1.875rem",
    "4xl" => "2.25rem",
    "5xl" => "3rem",
    "6xl" => "3.75rem",
    "7xl" => "4.5rem",
    "8xl" => "6rem",
    "9xl" => "8rem",
};

/// `fontWeight.{name}` → font-weight 值
pub static FONT_WEIGHT: phf::Map<&'static str, &'static str> = phf_map! {
    "thin" => "100",
    "extralight" => "200",
    "light" => "300",
    "normal" => "400",
    "medium" => "500",
    "semibold" => "600",
    "bold" => "700",
    "extrabold" => "800",
    "black" => "900",
};

/// `fontFamily.{name}` → font-family 值
pub static FONT_FAMILY: phf::Map<&'static str, &'static str> = phf_map! {
    "sans" => "ui-sans-serif, system-ui, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\"",
    "serif" => "ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif",
    "mono" => "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", monospace",
};

/// 按主题分区查默认值
pub fn default_value(section: &str, key: &str) -> Option<&'static str> {
    match section {
        "fontSize" => FONT_SIZE.get(key).copied(),
        "fontWeight" => FONT_WEIGHT.get(key).copied(),
        "fontFamily" => FONT_FAMILY.get(key).copied(),
        _ => None,
    }
}
