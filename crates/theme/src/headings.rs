use crosswind_core::Declaration;

use crate::plugin::{Plugin, PluginApi};

/// 各级标题的 font-size token
const HEADING_FONT_SIZES: [(&str, &str); 6] = [
    ("h1", "fontSize.2xl"),
    ("h2", "fontSize.xl"),
    ("h3", "fontSize.lg"),
    ("h4", "fontSize.lg"),
    ("h5", "fontSize.lg"),
    ("h6", "fontSize.lg"),
];

const HEADING_FONT_WEIGHT: &str = "fontWeight.bold";

/// 为 h1–h6 安装基础字号与字重
///
/// 每个标题固定产生一条基础样式；解析不到的 token 跳过并给出警告。
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingBase;

impl Plugin for HeadingBase {
    fn name(&self) -> &'static str {
        "heading-base"
    }

    fn register(&self, api: &mut PluginApi<'_>) {
        for (selector, size_token) in HEADING_FONT_SIZES {
            let mut declarations = Vec::with_capacity(2);

            match api.theme(size_token) {
                Some(value) => declarations.push(Declaration::new("font-size", value)),
                None => api.warn(format!(
                    "{}: unresolved token `{}` for {}",
                    self.name(),
                    size_token,
                    selector
                )),
            }

            match api.theme(HEADING_FONT_WEIGHT) {
                Some(value) => declarations.push(Declaration::new("font-weight", value)),
                None => api.warn(format!(
                    "{}: unresolved token `{}` for {}",
                    self.name(),
                    HEADING_FONT_WEIGHT,
                    selector
                )),
            }

            api.add_base(selector, declarations);
        }
    }
}
