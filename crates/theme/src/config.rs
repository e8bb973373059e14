use crosswind_core::Diagnostic;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::plugin::Plugin;
use crate::scale::ColorScale;

/// 构建期配置的顶层结构
///
/// 宿主引擎在构建开始时读取一次，之后不再变动。
/// 序列化字段名与宿主的配置约定一致（camelCase）。
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// 源码扫描范围，原样传给宿主
    #[serde(default)]
    pub extract: Extract,
    /// 暗色模式触发方式；None 表示未启用
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<DarkMode>,
    #[serde(default)]
    pub theme: Theme,
    /// 插件按注册顺序执行；无法序列化，因此跳过
    #[serde(skip)]
    pub plugins: Vec<Box<dyn Plugin>>,
}

impl Config {
    /// 从 JSON 字符串加载配置（不含插件）
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 配置自检：色阶完整性与颜色格式
    ///
    /// 返回空列表表示通过
    pub fn check(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for (name, scale) in &self.theme.extend.colors {
            diagnostics.extend(scale.validate(name));
        }
        diagnostics
    }
}

/// 类名提取的扫描范围
///
/// glob 模式不在这里校验，宿主负责解释
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extract {
    pub include: Vec<String>,
}

/// 暗色模式的触发方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// 由祖先元素上的 class 切换
    Class,
    /// 跟随 prefers-color-scheme 媒体查询
    Media,
}

/// `theme` 分区
///
/// 直接写在这里的分区会整体替换宿主默认值，`extend` 里的则做合并
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub min_height: IndexMap<String, String>,
    #[serde(default)]
    pub extend: ThemeExtend,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeExtend {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub colors: IndexMap<String, ColorScale>,
}
