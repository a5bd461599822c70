//! Color configuration and the palette shared by every widget.

use crate::state::Severity;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for the aid log screens.
///
/// With colors disabled only modifiers (bold, reversed, dim) remain, so the
/// selection and headers stay readable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Table column headers and section titles.
    pub header: Style,
    /// Selected table row.
    pub selected: Style,
    /// Row whose completion call is outstanding.
    pub in_flight: Style,
    /// Current page link and active tab.
    pub highlight: Style,
    /// Hints and disabled controls.
    pub muted: Style,
    /// Focused border.
    pub focus_border: Style,
    /// Key names in help and footers.
    pub key: Style,
    info: Style,
    success: Style,
    warning: Style,
    error: Style,
}

impl Palette {
    /// Build the palette for `config`.
    pub fn new(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let dim = Style::default().add_modifier(Modifier::DIM);
        let reversed = Style::default().add_modifier(Modifier::REVERSED);

        if config.colors_enabled() {
            Self {
                header: bold.fg(Color::Cyan),
                selected: reversed,
                in_flight: dim.fg(Color::Yellow),
                highlight: bold.fg(Color::Yellow),
                muted: dim.fg(Color::Gray),
                focus_border: Style::default().fg(Color::Cyan),
                key: bold.fg(Color::Yellow),
                info: Style::default().fg(Color::Blue),
                success: Style::default().fg(Color::Green),
                warning: Style::default().fg(Color::Yellow),
                error: bold.fg(Color::Red),
            }
        } else {
            Self {
                header: bold,
                selected: reversed,
                in_flight: dim,
                highlight: bold,
                muted: dim,
                focus_border: bold,
                key: bold,
                info: Style::default(),
                success: Style::default(),
                warning: bold,
                error: bold,
            }
        }
    }

    /// Style for a notification of `severity`.
    pub fn severity(&self, severity: Severity) -> Style {
        match severity {
            Severity::Info => self.info,
            Severity::Success => self.success,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // ===== ColorConfig Tests =====

    #[test]
    #[serial(no_color_env)]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(no_color_env)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(
            !config.colors_enabled(),
            "NO_COLOR env var should disable colors"
        );
    }

    #[test]
    #[serial(no_color_env)]
    fn color_config_enabled_by_default() {
        std::env::remove_var("NO_COLOR");
        assert!(ColorConfig::from_env_and_args(false).colors_enabled());
    }

    // ===== Palette Tests =====

    #[test]
    fn monochrome_palette_has_no_foreground_colors() {
        let palette = Palette::new(ColorConfig { enabled: false });
        for style in [
            palette.header,
            palette.highlight,
            palette.severity(Severity::Error),
            palette.severity(Severity::Success),
        ] {
            assert_eq!(style.fg, None);
        }
    }

    #[test]
    fn severities_are_distinct_with_colors() {
        let palette = Palette::new(ColorConfig { enabled: true });
        assert_ne!(
            palette.severity(Severity::Success),
            palette.severity(Severity::Error)
        );
        assert_ne!(
            palette.severity(Severity::Info),
            palette.severity(Severity::Warning)
        );
    }

    #[test]
    fn selection_stays_visible_without_colors() {
        let palette = Palette::new(ColorConfig { enabled: false });
        assert!(palette.selected.add_modifier.contains(Modifier::REVERSED));
    }
}
