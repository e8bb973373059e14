use crosswind_core::Diagnostic;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 常规的 10 个色阶档位（从浅到深）
pub const SHADE_STEPS: [&str; 10] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

/// 颜色色阶：档位 → 十六进制颜色值
///
/// 插入顺序即声明顺序，序列化时原样保留
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale {
    steps: IndexMap<String, String>,
}

impl ColorScale {
    pub fn new() -> Self {
        Self {
            steps: IndexMap::new(),
        }
    }

    /// 从完整的 10 档取值构造
    ///
    /// 数组长度固定为 10，构造出的色阶必然完整
    pub fn from_pairs(pairs: [(&str, &str); 10]) -> Self {
        let mut scale = Self::new();
        for (step, value) in pairs {
            scale.insert(step, value);
        }
        scale
    }

    pub fn insert(&mut self, step: impl Into<String>, value: impl Into<String>) {
        self.steps.insert(step.into(), value.into());
    }

    pub fn get(&self, step: &str) -> Option<&str> {
        self.steps.get(step).map(String::as_str)
    }

    /// 按声明顺序遍历 (档位, 颜色值)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.steps.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// 是否覆盖全部 10 个常规档位
    pub fn is_complete(&self) -> bool {
        SHADE_STEPS.iter().all(|step| self.steps.contains_key(*step))
    }

    /// 校验色阶：缺档和非法颜色值都作为错误上报
    ///
    /// `name` 只用于诊断信息里的定位
    pub fn validate(&self, name: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for step in SHADE_STEPS {
            if !self.steps.contains_key(step) {
                diagnostics.push(Diagnostic::error(format!(
                    "color scale `{}` is missing step {}",
                    name, step
                )));
            }
        }

        for (step, value) in &self.steps {
            if !is_hex_color(value) {
                diagnostics.push(Diagnostic::error(format!(
                    "color scale `{}` step {} has a non-hex value: {}",
                    name, step, value
                )));
            }
        }

        diagnostics
    }
}

/// 判断是否为 `#` 加 6 位十六进制的颜色字符串
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosswind_core::DiagnosticLevel;

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#f6f7f9"));
        assert!(is_hex_color("#FFE6BB"));

        assert!(!is_hex_color("f6f7f9"), "missing leading #");
        assert!(!is_hex_color("#fff"), "shorthand form is not accepted");
        assert!(!is_hex_color("#f6f7f9aa"), "8-digit form is not accepted");
        assert!(!is_hex_color("#g6f7f9"), "g is not a hex digit");
        assert!(!is_hex_color("currentColor"));
    }

    #[test]
    fn test_from_pairs_is_complete() {
        let scale = ColorScale::from_pairs([
            ("50", "#f6f7f9"),
            ("100", "#edeff2"),
            ("200", "#e1e4ea"),
            ("300", "#c3c9d5"),
            ("400", "#a5adc0"),
            ("500", "#828da6"),
            ("600", "#63708c"),
            ("700", "#4e586e"),
            ("800", "#3f475a"),
            ("900", "#313745"),
        ]);

        assert!(scale.is_complete());
        assert_eq!(scale.len(), 10);
        assert_eq!(scale.get("500"), Some("#828da6"));
        assert!(scale.validate("test").is_empty());
    }

    #[test]
    fn test_validate_missing_steps() {
        let mut scale = ColorScale::new();
        scale.insert("50", "#f6f7f9");

        assert!(!scale.is_complete());

        let diagnostics = scale.validate("partial");
        assert_eq!(diagnostics.len(), 9, "one diagnostic per missing step");
        assert!(diagnostics
            .iter()
            .all(|d| d.level == DiagnosticLevel::Error));
        assert!(diagnostics[0].message.contains("partial"));
        assert!(diagnostics[0].message.contains("100"));
    }

    #[test]
    fn test_validate_bad_value() {
        let mut scale = ColorScale::from_pairs([
            ("50", "#f6f7f9"),
            ("100", "#edeff2"),
            ("200", "#e1e4ea"),
            ("300", "#c3c9d5"),
            ("400", "#a5adc0"),
            ("500", "#828da6"),
            ("600", "#63708c"),
            ("700", "#4e586e"),
            ("800", "#3f475a"),
            ("900", "#313745"),
        ]);
        scale.insert("500", "rebeccapurple");

        let diagnostics = scale.validate("bad");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("rebeccapurple"));
    }

    #[test]
    fn test_iteration_preserves_declaration_order() {
        let mut scale = ColorScale::new();
        scale.insert("900", "#313745");
        scale.insert("50", "#f6f7f9");

        let steps: Vec<&str> = scale.iter().map(|(step, _)| step).collect();
        assert_eq!(steps, vec!["900", "50"]);
    }
}
