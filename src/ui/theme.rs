//! src/ui/theme.rs
//!
//! Color and glyph resolution by symbolic role.
//!
//! Widgets never hard-code colors: they ask the theme passed to their render
//! call, unless the host set an explicit override on the control.

use ratatui::style::Color;

/// Symbolic color roles understood by the themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    SparkChartText,
    SparkChartBack,
    SparkChartBarText,
    SparkChartBarBack,
    SparkChartMaxText,
    SparkChartMaxBack,
}

/// Widgets that ask the theme for their drawing glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeObject {
    /// First character is the bar-fill glyph.
    SparkChart,
}

pub trait Theme {
    fn color(&self, role: ColorRole) -> Color;
    fn sys_object(&self, object: ThemeObject) -> &str;
}

/// Resolve a color: an explicit override wins over the theme's role color.
pub fn real_color(theme: &dyn Theme, over: Option<Color>, role: ColorRole) -> Color {
    over.unwrap_or_else(|| theme.color(role))
}

/// Built-in dark theme.
#[derive(Clone, Debug)]
pub struct DefaultTheme {
    pub text: Color,
    pub back: Color,
    pub bar_text: Color,
    pub bar_back: Color,
    pub max_text: Color,
    pub max_back: Color,
    pub spark_glyphs: String,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self {
            text: Color::Gray,
            back: Color::Black,
            bar_text: Color::Cyan,
            bar_back: Color::Black,
            max_text: Color::LightRed,
            max_back: Color::Black,
            spark_glyphs: "█".to_string(),
        }
    }
}

impl Theme for DefaultTheme {
    fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::SparkChartText => self.text,
            ColorRole::SparkChartBack => self.back,
            ColorRole::SparkChartBarText => self.bar_text,
            ColorRole::SparkChartBarBack => self.bar_back,
            ColorRole::SparkChartMaxText => self.max_text,
            ColorRole::SparkChartMaxBack => self.max_back,
        }
    }

    fn sys_object(&self, object: ThemeObject) -> &str {
        match object {
            ThemeObject::SparkChart => &self.spark_glyphs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_theme() {
        let theme = DefaultTheme::default();
        assert_eq!(
            real_color(&theme, Some(Color::Magenta), ColorRole::SparkChartBarText),
            Color::Magenta
        );
    }

    #[test]
    fn missing_override_uses_role() {
        let theme = DefaultTheme::default();
        assert_eq!(
            real_color(&theme, None, ColorRole::SparkChartMaxText),
            theme.max_text
        );
        assert_eq!(real_color(&theme, None, ColorRole::SparkChartBack), theme.back);
    }

    #[test]
    fn spark_glyph_lookup() {
        let theme = DefaultTheme::default();
        assert_eq!(theme.sys_object(ThemeObject::SparkChart).chars().next(), Some('█'));
    }
}
