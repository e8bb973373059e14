use crosswind_core::{Declaration, Diagnostic};
use indexmap::IndexMap;

use crate::config::Config;
use crate::resolve::{ThemeLookup, ThemeResolver};

/// 构建期插件
///
/// `register` 在每次构建里只被调用一次，所有效果都通过 `PluginApi` 产生。
pub trait Plugin {
    /// 诊断信息里用的插件名
    fn name(&self) -> &'static str;

    fn register(&self, api: &mut PluginApi<'_>);
}

/// 插件能力对象：解析主题 token + 追加基础样式
pub struct PluginApi<'a> {
    lookup: &'a dyn ThemeLookup,
    base: BaseStyles,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> PluginApi<'a> {
    pub fn new(lookup: &'a dyn ThemeLookup) -> Self {
        Self {
            lookup,
            base: BaseStyles::default(),
            diagnostics: Vec::new(),
        }
    }

    /// 解析主题 token（如 "fontSize.2xl"）
    pub fn theme(&self, path: &str) -> Option<String> {
        self.lookup.theme(path)
    }

    /// 追加一条基础样式规则
    ///
    /// 同一选择器多次追加时声明会合并
    pub fn add_base(&mut self, selector: &str, declarations: Vec<Declaration>) {
        self.base.write(selector, declarations);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(message));
    }

    pub fn base(&self) -> &BaseStyles {
        &self.base
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn into_output(self) -> PluginOutput {
        PluginOutput {
            base: self.base,
            diagnostics: self.diagnostics,
        }
    }
}

/// 基础样式集合：选择器 → 声明列表
///
/// 与工具类无关，无条件作用于选择器本身；按插入顺序输出。
#[derive(Debug, Clone, Default)]
pub struct BaseStyles {
    rules: IndexMap<String, Vec<Declaration>>,
}

impl BaseStyles {
    /// 写入声明到指定选择器
    pub fn write(&mut self, selector: &str, declarations: Vec<Declaration>) {
        self.rules
            .entry(selector.to_string())
            .and_modify(|decls| decls.extend(declarations.clone()))
            .or_insert(declarations);
    }

    pub fn get(&self, selector: &str) -> Option<&[Declaration]> {
        self.rules.get(selector).map(Vec::as_slice)
    }

    /// 按插入顺序遍历选择器
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 生成 CSS 字符串
    pub fn to_css(&self, indent: &str) -> String {
        let mut css = String::new();

        for (selector, decls) in &self.rules {
            if decls.is_empty() {
                continue;
            }
            css.push_str(&format!("{} {{\n", selector));
            for decl in decls {
                css.push_str(&format!("{}{}: {};\n", indent, decl.property, decl.value));
            }
            css.push_str("}\n");
        }

        css
    }
}

/// 插件执行结果
#[derive(Debug, Default)]
pub struct PluginOutput {
    pub base: BaseStyles,
    pub diagnostics: Vec<Diagnostic>,
}

/// 按注册顺序执行配置里的全部插件
///
/// 所有插件共享同一个能力对象，基础样式按注册顺序累积。
pub fn apply_plugins(config: &Config) -> PluginOutput {
    let resolver = ThemeResolver::new(config);
    let mut api = PluginApi::new(&resolver);

    for plugin in &config.plugins {
        plugin.register(&mut api);
    }

    api.into_output()
}
