use crate::config::Config;
use crate::tokens;

/// 主题 token 解析的接缝
///
/// 插件只通过这个 trait 看到主题；测试里可以换成桩实现。
pub trait ThemeLookup {
    /// 解析形如 "fontSize.2xl" 的点分路径；未知路径返回 None
    fn theme(&self, path: &str) -> Option<String>;
}

/// 基于配置的解析器
///
/// 配置自身的分区（minHeight、extend.colors）优先，
/// 其余路径落到内置默认主题。
pub struct ThemeResolver<'a> {
    config: &'a Config,
}

impl<'a> ThemeResolver<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl ThemeLookup for ThemeResolver<'_> {
    fn theme(&self, path: &str) -> Option<String> {
        let (section, rest) = path.split_once('.')?;

        match section {
            "minHeight" => self.config.theme.min_height.get(rest).cloned(),
            "colors" => {
                // colors.{scale}.{step}
                let (scale, step) = rest.split_once('.')?;
                self.config
                    .theme
                    .extend
                    .colors
                    .get(scale)?
                    .get(step)
                    .map(str::to_string)
            }
            _ => tokens::default_value(section, rest).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::site_config;

    #[test]
    fn test_resolve_default_tokens() {
        let config = site_config();
        let resolver = ThemeResolver::new(&config);

        assert_eq!(resolver.theme("fontSize.2xl"), Some("1.5rem".to_string()));
        assert_eq!(resolver.theme("fontWeight.bold"), Some("700".to_string()));
    }

    #[test]
    fn test_resolve_config_sections() {
        let config = site_config();
        let resolver = ThemeResolver::new(&config);

        assert_eq!(resolver.theme("minHeight.prose"), Some("40ch".to_string()));
        assert_eq!(
            resolver.theme("colors.steel.500"),
            Some("#828da6".to_string())
        );
        assert_eq!(
            resolver.theme("colors.ember.900"),
            Some("#593800".to_string())
        );
    }

    #[test]
    fn test_resolve_unknown_paths() {
        let config = site_config();
        let resolver = ThemeResolver::new(&config);

        assert_eq!(resolver.theme("fontSize"), None, "path without a dot");
        assert_eq!(resolver.theme("colors.steel"), None, "scale without step");
        assert_eq!(resolver.theme("colors.jade.500"), None);
        assert_eq!(resolver.theme("spacing.4"), None);
        assert_eq!(resolver.theme("minHeight.screen"), None);
    }
}
