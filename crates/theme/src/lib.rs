pub mod config;
pub mod headings;
pub mod plugin;
pub mod preset;
pub mod resolve;
pub mod scale;
pub mod tokens;

// Re-export main types
pub use config::{Config, DarkMode, Extract, Theme, ThemeExtend};
pub use headings::HeadingBase;
pub use plugin::{apply_plugins, BaseStyles, Plugin, PluginApi, PluginOutput};
pub use preset::site_config;
pub use resolve::{ThemeLookup, ThemeResolver};
pub use scale::{is_hex_color, ColorScale, SHADE_STEPS};
