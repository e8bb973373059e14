use indexmap::IndexMap;

use crate::config::{Config, DarkMode, Extract, Theme, ThemeExtend};
use crate::headings::HeadingBase;
use crate::scale::ColorScale;

/// 站点实际使用的构建配置
///
/// 两个色阶：`steel` 冷色中性色，`ember` 暖色强调色。
pub fn site_config() -> Config {
    let mut min_height = IndexMap::new();
    min_height.insert("prose".to_string(), "40ch".to_string());

    let mut colors = IndexMap::new();
    colors.insert(
        "steel".to_string(),
        ColorScale::from_pairs([
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
        ]),
    );
    colors.insert(
        "ember".to_string(),
        ColorScale::from_pairs([
            // 50 与 100 在原始配色里就是同一个值
            ("50", "#FFE6BB"),
            ("100", "#FFE6BB"),
            ("200", "#FFCD78"),
            ("300", "#FFBF52"),
            ("400", "#F79D00"),
            ("500", "#F39A00"),
            ("600", "#E39000"),
            ("700", "#CD8200"),
            ("800", "#AA6C00"),
            ("900", "#593800"),
        ]),
    );

    Config {
        extract: Extract {
            include: vec![
                "index.html".to_string(),
                "src/**/*.{vue, ts, md}".to_string(),
            ],
        },
        dark_mode: Some(DarkMode::Class),
        theme: Theme {
            min_height,
            extend: ThemeExtend { colors },
        },
        plugins: vec![Box::new(HeadingBase)],
    }
}
